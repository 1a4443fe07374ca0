use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::{Builder, NamedTempFile};

use crate::kernel::constants::TEMP_FILE_PREFIX;
use crate::kernel::error::{Error, Result};
use crate::storage::error::StorageSystemError;
use crate::storage::provider::StorageProvider;

#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Local filesystem storage provider
#[derive(Debug, Clone, Default)]
pub struct LocalStorageProvider;

impl LocalStorageProvider {
    pub fn new() -> Self {
        Self
    }

    /// Create a uniquely named temp file next to `target`
    fn temp_file_for(target: &Path, dir: &Path) -> Result<NamedTempFile> {
        let file_name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Builder::new()
            .prefix(&format!("{TEMP_FILE_PREFIX}{file_name}."))
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| StorageSystemError::persist(e, "create temp file", target.to_path_buf()).into())
    }
}

impl StorageProvider for LocalStorageProvider {
    fn name(&self) -> &str {
        "local"
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| Error::io(e, "create_dir_all", path.to_path_buf()))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::io(e, "read_to_string", path.to_path_buf()))
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> Result<()> {
        // Ensure parent directory exists
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => {
                return Err(StorageSystemError::InvalidPath {
                    path: path.to_path_buf(),
                    reason: "Cannot write to path without parent directory".to_string(),
                }
                .into());
            }
        };
        if !self.is_dir(parent) {
            self.create_dir_all(parent)?;
        }

        // Dropping the temp file on any early return removes it from disk
        let mut temp_file = Self::temp_file_for(path, parent)?;
        let persist_err = |stage: &str| {
            let path = path.to_path_buf();
            let stage = stage.to_string();
            move |e: std::io::Error| Error::from(StorageSystemError::persist(e, stage, path))
        };

        temp_file.write_all(contents).map_err(persist_err("write temp file"))?;
        temp_file.flush().map_err(persist_err("flush temp file"))?;
        temp_file.as_file().sync_all().map_err(persist_err("sync temp file"))?;

        // Keep the permission bits of the version being replaced. Temp files
        // start out owner-only, new values get the usual world-readable mode.
        match fs::metadata(path) {
            Ok(existing) => {
                fs::set_permissions(temp_file.path(), existing.permissions())
                    .map_err(persist_err("copy permissions"))?;
            }
            #[cfg(unix)]
            Err(_) => {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(temp_file.path(), fs::Permissions::from_mode(NEW_FILE_MODE))
                    .map_err(persist_err("set permissions"))?;
            }
            #[cfg(not(unix))]
            Err(_) => {}
        }

        // Persist the temporary file, atomically replacing the target file
        temp_file
            .persist(path)
            .map_err(|e| persist_err("rename temp file")(e.error))?;

        debug!("Atomically wrote {}", path.display());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|e| Error::io(e, "remove_file", path.to_path_buf()))
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        fs::remove_dir_all(path).map_err(|e| Error::io(e, "remove_dir_all", path.to_path_buf()))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(path).map_err(|e| Error::io(e, "read_dir", path.to_path_buf()))?;
        let mut result = Vec::new();

        for entry in entries {
            // Map error for individual entry reading
            let entry = entry.map_err(|e| Error::io(e, "read_dir_entry", path.to_path_buf()))?;
            result.push(entry.path());
        }

        Ok(result)
    }
}
