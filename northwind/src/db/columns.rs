//! Parameter constraints mirroring the column definitions in `migrations/`.
//!
//! Text columns in the Northwind schema are fixed-width `VARCHAR(n)` (or
//! unbounded `TEXT`), some of them `NOT NULL`. Values are checked here before
//! they are bound, so an over-long or missing value is reported as
//! [`DbError::InvalidArgument`] instead of a store-side failure. Widths count
//! characters, not bytes, matching how PostgreSQL measures `VARCHAR(n)`.

use crate::db::errors::{DbError, Result};

/// A text column's width and nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColumn {
    pub name: &'static str,
    /// Maximum length in characters; `None` for `TEXT`
    pub max_chars: Option<usize>,
    /// Whether the column is `NOT NULL`
    pub required: bool,
}

impl TextColumn {
    /// A `VARCHAR(max_chars) NOT NULL` column
    pub const fn required(name: &'static str, max_chars: usize) -> Self {
        Self {
            name,
            max_chars: Some(max_chars),
            required: true,
        }
    }

    /// A nullable `VARCHAR(max_chars)` column
    pub const fn nullable(name: &'static str, max_chars: usize) -> Self {
        Self {
            name,
            max_chars: Some(max_chars),
            required: false,
        }
    }

    /// A nullable `TEXT` column
    pub const fn unbounded(name: &'static str) -> Self {
        Self {
            name,
            max_chars: None,
            required: false,
        }
    }

    /// Check a value destined for this column. `None` stands for SQL `NULL`.
    pub fn check(&self, value: Option<&str>) -> Result<()> {
        let Some(value) = value else {
            return if self.required {
                Err(DbError::invalid_argument(self.name, "must not be null"))
            } else {
                Ok(())
            };
        };

        if self.required && value.trim().is_empty() {
            return Err(DbError::invalid_argument(self.name, "must not be empty"));
        }

        // PostgreSQL text can't hold NUL
        if value.contains('\0') {
            return Err(DbError::invalid_argument(self.name, "must not contain NUL characters"));
        }

        if let Some(max) = self.max_chars
            && value.chars().count() > max
        {
            return Err(DbError::invalid_argument(
                self.name,
                format!("must be at most {max} characters long"),
            ));
        }

        Ok(())
    }
}

/// Reject identifiers the store can never have assigned.
pub fn require_positive_id(argument: &'static str, id: i32) -> Result<()> {
    if id <= 0 {
        return Err(DbError::invalid_argument(argument, "must be greater than zero"));
    }
    Ok(())
}

/// Like [`require_positive_id`] for a nullable reference column; `None` passes.
pub fn require_positive_ref(argument: &'static str, id: Option<i32>) -> Result<()> {
    id.map_or(Ok(()), |id| require_positive_id(argument, id))
}
