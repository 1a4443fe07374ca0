//! # libreg core
//!
//! A hierarchical registry of typed values stored directly on the
//! filesystem. Keys are directories, each value is one
//! `<name>.<type>.rv` file, and several roots ("hives") are layered by
//! precedence when a path does not name one explicitly.
//!
//! ```no_run
//! use libreg_core::{HiveTable, Registry, Value};
//!
//! # fn main() -> libreg_core::Result<()> {
//! let registry = Registry::new(HiveTable::for_user("alice")?);
//! registry.write("alice", "SOFTWARE/App/Enabled", &Value::from(true))?;
//! let _enabled = registry.get("SOFTWARE/App/Enabled")?;
//! # Ok(())
//! # }
//! ```
pub mod hive;
pub mod hooks;
pub mod kernel;
pub mod ownership;
pub mod path;
pub mod registry;
pub mod storage;
pub mod value;

// Re-export key public types for the binary and other consumers
pub use hive::{HiveDef, HiveTable};
pub use hooks::{CommandExecutor, ProcessExecutor};
pub use kernel::error::{Error, Result};
pub use ownership::{NoopOwnership, OwnershipSetter, SystemOwnership};
pub use registry::{Entry, InstallAction, InstallReport, Listing, ListingKind, Registry};
pub use storage::{LocalStorageProvider, StorageProvider};
pub use value::{Value, ValueType};

#[cfg(test)]
mod tests;
