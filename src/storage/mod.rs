//! Embedded SQLite storage for exported roster listings.
//!
//! Organized like the rest of the crate's adapters:
//! - `schema`: connection management and table creation
//! - `queries`: transactional row inserts and read-back
//!
//! All failures are typed. The original tool swallowed storage errors
//! with a bare catch-all; here an existing table is `AlreadyExists`
//! (informational to the menu) and insert failures distinguish
//! constraint violations from connection problems.

pub mod queries;
pub mod schema;

use thiserror::Error;

pub use schema::RosterDatabase;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("table {table} already exists")]
    AlreadyExists { table: String },

    #[error("could not open database: {message}")]
    ConnectionFailed { message: String },

    #[error("constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("storage failure: {message}")]
    Unknown { message: String },
}

pub(crate) fn classify(err: rusqlite::Error) -> StorageError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StorageError::ConstraintViolation {
                message: err.to_string(),
            }
        }
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::CannotOpen => {
            StorageError::ConnectionFailed {
                message: err.to_string(),
            }
        }
        _ => StorageError::Unknown {
            message: err.to_string(),
        },
    }
}
