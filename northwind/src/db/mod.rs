//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//! It follows the Repository pattern: one data access object per Northwind table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Services   │  (services - id checks, not-found translation)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Factory   │  (db::factory - one connection, lends it out)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - parameterized statements)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - transfer records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for CRUD operations
//! - [`models`]: Transfer records matching table schemas
//! - [`columns`]: Width and nullability checks for bound text values
//! - [`factory`]: Connection-owning factory for repositories
//! - [`errors`]: Database-specific error types
//!
//! ## Example Usage
//!
//! ```ignore
//! use northwind::db::factory::DataAccessFactory;
//! use northwind::db::handlers::Repository;
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut factory = DataAccessFactory::acquire(pool).await?;
//!
//!     let employee = factory.employees().find(1).await?;
//!     println!("Found employee: {} {}", employee.first_name, employee.last_name);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Migrations
//!
//! Database migrations are managed by SQLx and located in the `migrations/` directory.
//! The [`crate::migrator`] function provides access to the migrator:
//!
//! ```ignore
//! northwind::migrator().run(&pool).await?;
//! ```

pub mod columns;
pub mod errors;
pub mod factory;
pub mod handlers;
pub mod models;
