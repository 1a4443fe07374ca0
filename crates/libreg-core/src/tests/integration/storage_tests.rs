#![cfg(test)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::kernel::error::Result;
use crate::registry::{Entry, Registry};
use crate::storage::{LocalStorageProvider, StorageProvider};
use crate::tests::integration::common::{Fixture, RecordingOwnership};
use crate::value::Value;

/// Local storage that remembers every value file it replaces or removes
#[derive(Debug, Default)]
struct RecordingStorage {
    inner: LocalStorageProvider,
    writes: Mutex<Vec<PathBuf>>,
    removals: Mutex<Vec<PathBuf>>,
}

impl StorageProvider for RecordingStorage {
    fn name(&self) -> &str {
        "recording"
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.inner.create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.inner.read_to_string(path)
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.writes.lock().unwrap().push(path.to_path_buf());
        self.inner.write_atomic(path, contents)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.removals.lock().unwrap().push(path.to_path_buf());
        self.inner.remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        self.removals.lock().unwrap().push(path.to_path_buf());
        self.inner.remove_dir_all(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.inner.read_dir(path)
    }
}

#[test]
fn test_registry_goes_through_injected_storage() -> Result<()> {
    let fx = Fixture::new();
    let storage = Arc::new(RecordingStorage::default());
    assert_eq!(storage.name(), "recording");

    let registry = Registry::new(fx.registry.table().clone())
        .with_storage(storage.clone())
        .with_ownership(Arc::new(RecordingOwnership::default()));

    let file = registry.write("alice", "HKLM/App/Name", &Value::from("aqua"))?;
    assert_eq!(*storage.writes.lock().unwrap(), vec![file.clone()]);
    assert_eq!(
        registry.get("HKLM/App/Name")?,
        Some(Entry::Value(Value::Str("aqua".into())))
    );

    assert!(registry.delete("HKLM/App/Name")?);
    assert_eq!(*storage.removals.lock().unwrap(), vec![file]);
    Ok(())
}
