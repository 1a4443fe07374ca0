//! # Libreg Ownership Errors
//!
//! Failures while resolving a user or changing the owner of a registry path.
//! The registry facade never surfaces these to callers; they are logged.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OwnershipError {
    #[error("Failed to look up user '{user}': {reason}")]
    Lookup { user: String, reason: String },

    #[error("Failed to change owner of '{path}' to {uid}:{gid}: {reason}")]
    Chown {
        path: PathBuf,
        uid: u32,
        gid: u32,
        reason: String,
    },
}
