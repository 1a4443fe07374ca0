//! # Libreg Core Errors
//!
//! Defines the crate-wide error type for the registry.
//!
//! Each subsystem owns its own typed error enum ([`HiveError`],
//! [`ValueError`], [`StorageSystemError`], [`OwnershipError`], [`HookError`]).
//! [`Error`] wraps all of them so the registry facade can use a single
//! [`Result`] alias and `?` across subsystem boundaries.
//!
//! Not every subsystem error reaches callers: ownership and hook failures
//! are logged and swallowed by the facade. They still convert into [`Error`]
//! so helpers can use `?` internally.
use std::path::PathBuf;
use std::result::Result as StdResult;

use crate::hive::error::HiveError;
use crate::hooks::error::HookError;
use crate::ownership::error::OwnershipError;
use crate::storage::error::StorageSystemError;
use crate::value::error::ValueError;
use thiserror::Error as ThisError;

/// Top-level error type for registry operations
#[derive(Debug, ThisError)]
pub enum Error {
    /// Root table lookups and hive table loading
    #[error("Hive error: {0}")]
    Hive(#[from] HiveError),

    /// Type inference, serialization and decoding of stored values
    #[error("Value error: {0}")]
    Value(#[from] ValueError),

    /// Specific, typed storage system error
    #[error("Storage system error: {0}")]
    StorageSystem(#[from] StorageSystemError),

    /// Ownership assignment (swallowed by the facade)
    #[error("Ownership error: {0}")]
    Ownership(#[from] OwnershipError),

    /// Hook execution (swallowed by the facade)
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

// Helper to create an Io error with context, wraps StorageSystemError::Io
impl Error {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        Error::StorageSystem(StorageSystemError::Io {
            source,
            operation: operation.into(),
            path,
        })
    }

    /// True when the error means "the named hive is not in the table".
    pub fn is_hive_not_found(&self) -> bool {
        matches!(self, Error::Hive(HiveError::NotFound { .. }))
    }
}
