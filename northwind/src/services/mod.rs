//! Management services: the caller-facing CRUD surface.
//!
//! Each service owns a [`DataAccessFactory`](crate::db::factory::DataAccessFactory), asks it for
//! the right repository on every call, and forwards the arguments after converting domain models
//! into transfer records. Services add exactly two behaviours on top of the repositories:
//!
//! - identifiers below one are rejected with [`Error::InvalidArgument`] before delegating
//! - a strict lookup's not-found becomes `Ok(None)` in the `try_show_*` operations
//!
//! Updates also compare the identifier argument with the model's own identifier and report
//! `false` without touching the store when they differ.

pub mod blogging;
pub mod categories;
pub mod employees;
pub mod products;

pub use blogging::BloggingService;
pub use categories::CategoryManagementService;
pub use employees::EmployeeManagementService;
pub use products::ProductManagementService;

use crate::db::errors::DbError;
use crate::errors::{Error, Result};

fn require_id(argument: &'static str, id: i32) -> Result<()> {
    if id < 1 {
        return Err(Error::invalid_argument(argument, "can't be less than one"));
    }
    Ok(())
}

/// Turn a strict lookup into an optional one
fn found<T>(result: crate::db::errors::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(record) => Ok(Some(record)),
        Err(DbError::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id() {
        assert!(require_id("employee_id", 1).is_ok());
        assert!(require_id("employee_id", 0).unwrap_err().is_invalid_argument());
        assert!(require_id("employee_id", -1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_found() {
        assert_eq!(found(Ok(5)).unwrap(), Some(5));
        assert_eq!(found::<i32>(Err(DbError::NotFound)).unwrap(), None);
        assert!(found::<i32>(Err(DbError::invalid_argument("limit", "must be greater than zero")))
            .unwrap_err()
            .is_invalid_argument());
        assert!(matches!(
            found::<i32>(Err(DbError::Other(anyhow::anyhow!("connection reset")))),
            Err(Error::Database(DbError::Other(_)))
        ));
    }
}
