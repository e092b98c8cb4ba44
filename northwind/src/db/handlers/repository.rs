//! Base repository trait for database operations.
//!
//! A repository is the data access object for one Northwind table. It provides methods for
//! inserting, finding, updating, and deleting records, as well as listing them a page at a time.
//!
//! Each repository works on a flat transfer record that mirrors the table's columns.

use crate::db::errors::{DbError, Result};

/// Offset/limit window over a table, ordered by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Reject windows the store would not accept: a negative offset or a non-positive limit.
    pub fn validate(&self) -> Result<()> {
        if self.offset < 0 {
            return Err(DbError::invalid_argument("offset", "must be greater than or equal to zero"));
        }
        if self.limit < 1 {
            return Err(DbError::invalid_argument("limit", "must be greater than zero"));
        }
        Ok(())
    }
}

/// Base repository trait providing common database operations
///
/// Updates are full-record overwrites keyed on the record's own identifier; there are no partial
/// patch semantics.
#[async_trait::async_trait]
pub trait Repository {
    /// The transfer record read from and written to the table
    type Record;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// The filter type for list operations
    type Filter: Send + Sync;

    /// Insert a new record, returning the identifier assigned by the store
    async fn insert(&mut self, record: &Self::Record) -> Result<Self::Id>;

    /// Find a record by ID, failing with [`DbError::NotFound`] if it is absent
    async fn find(&mut self, id: Self::Id) -> Result<Self::Record>;

    /// List records with filtering and pagination
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Record>>;

    /// Overwrite a record; returns whether a row was affected
    async fn update(&mut self, record: &Self::Record) -> Result<bool>;

    /// Delete a record by ID; returns whether a row was affected
    async fn delete(&mut self, id: Self::Id) -> Result<bool>;
}
