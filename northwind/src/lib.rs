//! # northwind: data access and management services for the Northwind store
//!
//! `northwind` persists the records of a small trading company (employees, products, product
//! categories) and of its customer blog (articles, the products an article mentions, customer
//! comments) in PostgreSQL, and exposes create/read/update/delete operations over them.
//!
//! ## Architecture
//!
//! Calls flow through three layers:
//!
//! - [`services`]: one management service per aggregate. Services convert domain
//!   [`models`] into transfer records, reject identifiers below one, and turn a strict
//!   not-found into `Ok(None)`.
//! - [`db::factory`]: owns a single pooled connection and lends it to repositories.
//! - [`db::handlers`]: repositories issuing parameterized statements, one per table. Text is
//!   checked against the column width before it is bound, and updates and deletes report
//!   whether a row was affected.
//!
//! ## Getting Started
//!
//! ```ignore
//! use northwind::services::EmployeeManagementService;
//!
//! let pool = northwind::connect(&config.database).await?;
//! northwind::migrator().run(&pool).await?;
//!
//! let mut employees = EmployeeManagementService::connect(&pool).await?;
//! if let Some(employee) = employees.try_show_employee(1).await? {
//!     println!("{} {}", employee.first_name, employee.last_name);
//! }
//! ```
//!
//! The `northwind` binary loads [`Config`], initializes [`telemetry`], connects and applies the
//! embedded migrations.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use config::Config;

use crate::config::DatabaseConfig;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, instrument};

/// Get the northwind database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Open a connection pool sized by the configured pool settings
#[instrument(skip_all, fields(max_connections = config.pool.max_connections), err)]
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let settings = &config.pool;
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout())
        .idle_timeout(settings.idle_timeout())
        .max_lifetime(settings.max_lifetime())
        .connect(&config.url)
        .await?;

    info!("Connected to database");
    Ok(pool)
}

/// Connect and bring the schema up to date
pub async fn setup_database(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = connect(config).await?;
    migrator().run(&pool).await?;
    info!("Database migrations applied");
    Ok(pool)
}
