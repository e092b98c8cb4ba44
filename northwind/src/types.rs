//! Common type definitions.
//!
//! Every Northwind table uses a store-generated `SERIAL` key, so all entity
//! identifiers are plain `i32` values wrapped in type aliases for readability.
//! Identifiers handed out by the store are always positive; zero and negative
//! values are rejected by the data-access layer before a statement is issued.
//!
//! - [`EmployeeId`]: employee identifier (also used for `reports_to`)
//! - [`ProductId`]: product identifier
//! - [`CategoryId`]: product category identifier
//! - [`SupplierId`]: supplier reference carried by products
//! - [`BlogArticleId`]: blog article identifier
//! - [`BlogArticleProductId`]: article/product link identifier
//! - [`BlogCommentId`]: blog comment identifier
//! - [`CustomerId`]: customer reference carried by blog comments

// Type aliases for IDs
pub type EmployeeId = i32;
pub type ProductId = i32;
pub type CategoryId = i32;
pub type SupplierId = i32;
pub type BlogArticleId = i32;
pub type BlogArticleProductId = i32;
pub type BlogCommentId = i32;
pub type CustomerId = i32;
