use std::path::PathBuf;

use log::{debug, warn};
use serde_json::Value as JsonValue;

use crate::hive::HiveError;
use crate::hooks::dispatch;
use crate::kernel::constants::HOOKS_KEY;
use crate::kernel::error::Result;
use crate::ownership::{UserRecord, assign_one, assign_path};
use crate::path::{RegistryPath, classify, encoded_path};
use crate::registry::entry::Entry;
use crate::registry::{Registry, value_file};
use crate::storage::StorageSystemError;
use crate::value::{Value, ValueType, encode, serialize};

/// Where a mutating operation lands
struct Target {
    hive: String,
    base: PathBuf,
    path: RegistryPath,
    /// Encoded physical path, without a value file suffix
    physical: PathBuf,
}

impl Registry {
    /// Store `value` at `path` and return the value file written.
    ///
    /// A path naming a hive writes to that hive, any other path to the
    /// per-user hive. Values in the per-user hive, and the directories created
    /// for them, are handed to `as_user`. Registered hooks run after the value
    /// is committed; their failures are logged and do not affect the result.
    pub fn write(&self, as_user: &str, path: &str, value: &Value) -> Result<PathBuf> {
        self.commit(as_user, path, value.value_type(), serialize(value))
    }

    /// Like [`write`](Self::write) for dynamically typed input.
    ///
    /// With `ty` set, the input is stored as that type without range checks
    /// (string input verbatim). Without it the type is inferred.
    pub fn write_as(
        &self,
        as_user: &str,
        path: &str,
        input: &JsonValue,
        ty: Option<ValueType>,
    ) -> Result<PathBuf> {
        let (ty, text) = encode(input, ty)?;
        self.commit(as_user, path, ty, text)
    }

    /// Delete a key recursively, or the first type variant of a value.
    ///
    /// A path naming a hive deletes only there; any other path deletes only
    /// in the per-user hive. Returns whether anything was removed.
    pub fn delete(&self, path: &str) -> Result<bool> {
        let target = self.target(path)?;
        self.require_below_root(&target)?;

        if self.storage.is_dir(&target.physical) {
            self.storage.remove_dir_all(&target.physical)?;
            debug!("Deleted key {} in {}", target.path.relative, target.hive);
            return Ok(true);
        }

        for ty in ValueType::ALL {
            let file = value_file(&target.physical, ty);
            if self.storage.is_file(&file) {
                self.storage.remove_file(&file)?;
                debug!("Deleted {} value {} in {}", ty, target.path.relative, target.hive);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Create the key at `path` and any missing ancestors.
    ///
    /// Targets the hive the same way [`write`](Self::write) does and applies
    /// the same ownership rules. No hooks run.
    pub fn create_key(&self, as_user: &str, path: &str) -> Result<PathBuf> {
        let target = self.target(path)?;
        self.require_below_root(&target)?;

        self.storage.create_dir_all(&target.physical)?;
        if let Some(user) = self.owner_for(&target, as_user) {
            assign_path(self.ownership.as_ref(), &target.base, &target.physical, &user);
        }
        debug!("Created key {} in {}", target.path.relative, target.hive);
        Ok(target.physical)
    }

    fn commit(&self, as_user: &str, path: &str, ty: ValueType, text: String) -> Result<PathBuf> {
        let target = self.target(path)?;
        self.require_below_root(&target)?;

        let file = value_file(&target.physical, ty);
        let dir = file
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| target.base.clone());
        self.storage.create_dir_all(&dir)?;

        let owner = self.owner_for(&target, as_user);
        if let Some(user) = &owner {
            assign_path(self.ownership.as_ref(), &target.base, &dir, user);
        }

        self.storage.write_atomic(&file, text.as_bytes())?;
        debug!("Wrote {} value {} in {}", ty, target.path.relative, target.hive);

        if let Some(user) = &owner {
            assign_one(self.ownership.as_ref(), &file, user);
        }

        self.run_hooks(path, &target.path.relative, &text);
        Ok(file)
    }

    /// Resolve the hive a mutating operation applies to
    fn target(&self, path: &str) -> Result<Target> {
        let parsed = classify(path, &self.table);
        let hive = match &parsed.hive {
            Some(hive) => hive.clone(),
            None => self.table.user_hive()?.to_string(),
        };
        let base = self
            .table
            .base_dir(&hive)
            .ok_or_else(|| HiveError::not_found(&hive))?;
        let physical = encoded_path(&base, &parsed.relative);
        Ok(Target {
            hive,
            base,
            path: parsed,
            physical,
        })
    }

    /// Mutations must name something below the hive root
    fn require_below_root(&self, target: &Target) -> Result<()> {
        if target.physical == target.base {
            return Err(StorageSystemError::InvalidPath {
                path: target.base.clone(),
                reason: format!("'{}' names the root of hive {}", target.path.relative, target.hive),
            }
            .into());
        }
        Ok(())
    }

    /// The user to hand new paths to, if the target is the per-user hive
    fn owner_for(&self, target: &Target, as_user: &str) -> Option<UserRecord> {
        if self.table.user_hive().ok() != Some(target.hive.as_str()) {
            return None;
        }
        match self.ownership.resolve_user(as_user) {
            Ok(Some(user)) => Some(user),
            Ok(None) => {
                debug!("Unknown user '{}', leaving ownership unchanged", as_user);
                None
            }
            Err(e) => {
                debug!("Could not resolve user '{}': {}", as_user, e);
                None
            }
        }
    }

    /// Run the hooks registered for a just-written path.
    ///
    /// Hooks registered under the hive-relative path take precedence over
    /// those registered under the path exactly as the caller spelled it.
    fn run_hooks(&self, path: &str, relative: &str, text: &str) {
        let mut hooks = self.hook_lines(relative);
        if hooks.is_empty() {
            hooks = self.hook_lines(path.trim_start_matches('/'));
        }
        if hooks.is_empty() {
            return;
        }
        let succeeded = dispatch(self.executor.as_ref(), &hooks, text);
        debug!("{}/{} hooks succeeded for {}", succeeded, hooks.len(), path);
    }

    fn hook_lines(&self, key: &str) -> Vec<String> {
        let hook_path = format!("{HOOKS_KEY}/{key}");
        let lines = match self.get(&hook_path) {
            Ok(Some(Entry::Value(Value::List(items)))) => items,
            Ok(Some(Entry::Value(Value::Str(line)))) => vec![line],
            Ok(_) => Vec::new(),
            Err(e) => {
                warn!("Failed to read hooks at '{}': {}", hook_path, e);
                Vec::new()
            }
        };
        lines.into_iter().filter(|line| !line.trim().is_empty()).collect()
    }
}
