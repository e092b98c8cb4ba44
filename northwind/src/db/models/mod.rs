//! Database record models matching table schemas.
//!
//! Each struct here is the transfer object for one table: a flat record whose fields map
//! one-to-one onto the table's columns, read from result rows by column name. Repositories in
//! [`crate::db::handlers`] accept and return these records.
//!
//! # Design Principles
//!
//! - **Schema Mapping**: Each record matches a table in `migrations/`, nullable columns are `Option`
//! - **Separation**: Records are distinct from the domain models in [`crate::models`]
//! - **Explicit Conversion**: `From` impls in both directions copy every field unchanged
//!
//! # Records
//!
//! - [`employees`] maps the `employees` table
//! - [`products`] maps the `products` table
//! - [`categories`] maps the `categories` table
//! - [`blogging`] maps `blog_articles`, `blog_article_products` and `blog_comments`
//!
//! # Example
//!
//! ```ignore
//! use northwind::db::models::employees::EmployeeDBRecord;
//! use northwind::models::employees::Employee;
//!
//! let record: EmployeeDBRecord = /* ... */;
//! let employee: Employee = record.into();
//! ```

pub mod blogging;
pub mod categories;
pub mod employees;
pub mod products;
