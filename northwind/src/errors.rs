use crate::db::errors::DbError;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Argument rejected before the call reached the store
    #[error("Invalid argument `{argument}`: {message}")]
    InvalidArgument { argument: &'static str, message: String },

    /// Configuration that can't be used to start
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Database operation error
    #[error(transparent)]
    Database(DbError),
}

impl Error {
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Whether the caller supplied a bad argument, regardless of which layer caught it
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

/// Invalid arguments caught by a repository surface the same way as those caught by a service
impl From<DbError> for Error {
    fn from(err: DbError) -> Self {
        match err {
            DbError::InvalidArgument { argument, reason } => Error::InvalidArgument { argument, message: reason },
            other => Error::Database(other),
        }
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
