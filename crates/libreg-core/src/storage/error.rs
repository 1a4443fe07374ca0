//! # Libreg Storage System Errors
//!
//! Defines error types specific to the on-disk store.
//!
//! This module includes [`StorageSystemError`], covering plain file I/O
//! failures, failures of the temp-file/fsync/rename sequence used for atomic
//! value writes, and paths that cannot be written at all.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageSystemError {
    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// The atomic write of `path` failed at `stage`; the temp file was removed
    #[error("Atomic write of '{path}' failed while trying to {stage}: {source}")]
    Persist {
        path: PathBuf,
        stage: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path provided: '{path}': {reason}")]
    InvalidPath { path: PathBuf, reason: String },
}

// Helper for creating Io errors, ensuring path is always included.
impl StorageSystemError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        StorageSystemError::Io {
            source,
            operation: operation.into(),
            path,
        }
    }

    pub fn persist(source: std::io::Error, stage: impl Into<String>, path: PathBuf) -> Self {
        StorageSystemError::Persist {
            source,
            stage: stage.into(),
            path,
        }
    }
}
