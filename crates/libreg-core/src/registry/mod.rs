//! # Registry
//!
//! The facade callers use: [`Registry::read`], [`Registry::write`] and
//! [`Registry::delete`], plus [`Registry::create_key`] and
//! [`Registry::install`] for provisioning.
//!
//! A `Registry` owns its [`HiveTable`] and the three seams it talks to the
//! outside world through: storage, ownership and hook execution. Each seam is
//! a trait object so tests can swap in fakes.
pub mod entry;
pub mod install;
mod read;
mod write;

pub use entry::{Entry, Listing, ListingKind};
pub use install::{Directive, InstallAction, InstallReport, parse_directive};

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use crate::hive::HiveTable;
use crate::hooks::{CommandExecutor, ProcessExecutor};
use crate::kernel::constants::VALUE_FILE_SUFFIX;
use crate::ownership::{OwnershipSetter, SystemOwnership};
use crate::storage::{LocalStorageProvider, StorageProvider};
use crate::value::ValueType;

/// Filesystem-backed registry over one hive table
#[derive(Debug, Clone)]
pub struct Registry {
    table: HiveTable,
    storage: Arc<dyn StorageProvider>,
    ownership: Arc<dyn OwnershipSetter>,
    executor: Arc<dyn CommandExecutor>,
}

impl Registry {
    /// Registry on the local filesystem, with system ownership changes and
    /// hooks run as child processes
    pub fn new(table: HiveTable) -> Self {
        Self {
            table,
            storage: Arc::new(LocalStorageProvider::new()),
            ownership: Arc::new(SystemOwnership),
            executor: Arc::new(ProcessExecutor),
        }
    }

    pub fn with_storage(mut self, storage: Arc<dyn StorageProvider>) -> Self {
        debug!("Using {} storage provider", storage.name());
        self.storage = storage;
        self
    }

    pub fn with_ownership(mut self, ownership: Arc<dyn OwnershipSetter>) -> Self {
        self.ownership = ownership;
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn CommandExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn table(&self) -> &HiveTable {
        &self.table
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(HiveTable::default())
    }
}

/// `<target>.<type>.rv`, next to `target`
pub(crate) fn value_file(target: &Path, ty: ValueType) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(format!(".{}.{}", ty.tag(), VALUE_FILE_SUFFIX));
    PathBuf::from(name)
}

/// Split a value file name into its decoded name and type.
///
/// Names without the `.rv` suffix or with an unknown type tag yield `None`.
pub(crate) fn parse_value_file_name(file_name: &str) -> Option<(String, ValueType)> {
    let stem = file_name.strip_suffix(VALUE_FILE_SUFFIX)?.strip_suffix('.')?;
    let (name, tag) = stem.rsplit_once('.')?;
    let ty = ValueType::from_tag(tag)?;
    Some((crate::path::decode_segment(name), ty))
}
