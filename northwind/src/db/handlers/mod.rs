//! Repository implementations for database access.
//!
//! This module provides a repository struct (data access object) for each Northwind table.
//! Repositories follow a consistent pattern and implement the [`Repository`] trait.
//!
//! # Design Pattern
//!
//! Each repository:
//! - Borrows a single SQLx connection for its lifetime
//! - Checks identifiers, pagination windows, and text widths before issuing a statement
//! - Binds every value as a typed parameter
//! - Interprets results by scalar (`RETURNING` identifiers) or affected-row count
//! - Returns transfer records from [`crate::db::models`]
//!
//! Each operation is a single statement; repositories never open transactions.
//!
//! # Available Repositories
//!
//! - [`Employees`]: employee records
//! - [`Products`]: products, with lookups by name and by category
//! - [`Categories`]: product categories, with lookup by name
//! - [`BlogArticles`]: blog articles and their product links
//! - [`BlogComments`]: comments on blog articles
//!
//! # Common Pattern
//!
//! ```ignore
//! use northwind::db::handlers::{Employees, Page, Repository};
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let mut repo = Employees::new(&mut conn);
//!
//!     let first_page = repo.list(&Page::new(0, 10)).await?;
//!     Ok(())
//! }
//! ```

pub mod blog_articles;
pub mod blog_comments;
pub mod categories;
pub mod employees;
pub mod products;
pub mod repository;

pub use blog_articles::BlogArticles;
pub use blog_comments::{BlogCommentFilter, BlogComments};
pub use categories::Categories;
pub use employees::Employees;
pub use products::Products;
pub use repository::{Page, Repository};
