//! # Libreg Hive Errors
//!
//! Defines error types for the hive table: looking up roots by name,
//! retargeting the per-user root and loading tables from configuration files.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HiveError {
    #[error("Hive '{name}' is not defined in the hive table")]
    NotFound { name: String },

    #[error("Unknown user '{user}': no entry in the user database")]
    UnknownUser { user: String },

    #[error("Unsupported hive table format: {0}")]
    UnsupportedConfigFormat(PathBuf),

    #[error("Deserialization of hive table from '{format}' failed: {source}")]
    DeserializationError {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl HiveError {
    pub fn not_found(name: impl Into<String>) -> Self {
        HiveError::NotFound { name: name.into() }
    }
}
