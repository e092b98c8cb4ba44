//! Domain models handed to and returned from the management services.
//!
//! These are the caller-facing shapes. They are distinct from the transfer records in
//! [`crate::db::models`] so that storage and caller representations can evolve independently;
//! conversions between the two are explicit one-to-one field copies implemented next to the
//! transfer records.
//!
//! - [`employees`]: employee records, including manager reference and photo bytes
//! - [`products`]: products and their pricing/stock figures
//! - [`categories`]: product categories
//! - [`blogging`]: blog articles, article/product links, and comments

pub mod blogging;
pub mod categories;
pub mod employees;
pub mod products;
