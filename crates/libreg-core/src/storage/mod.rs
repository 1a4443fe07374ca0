//! # Libreg Storage
//!
//! Filesystem access for the registry. Value files are replaced with a
//! temp-file + fsync + rename sequence so a reader never sees a torn value.
pub mod error;
pub mod local;
pub mod provider;

/// Re-export key types
pub use error::StorageSystemError;
pub use local::LocalStorageProvider;
pub use provider::StorageProvider;
