use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::hive::error::HiveError;
use crate::hive::expand::expand_path;
use crate::kernel::constants::{
    HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, HKEY_LOCAL_MACHINE_NOINST, HKEY_VOLATILE_MEMORY,
    USER_REGISTRY_DIR,
};
use crate::kernel::error::Result;

/// One root of the registry namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveDef {
    /// Canonical long name, e.g. `HKEY_LOCAL_MACHINE`
    pub name: String,
    /// Short aliases, e.g. `HKLM`
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Base directory template; may contain `~`, `$HOME`, `$VAR` or `${VAR}`
    pub path: String,
}

impl HiveDef {
    pub fn new(name: &str, aliases: &[&str], path: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            path: path.to_string(),
        }
    }

    fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }
}

/// The set of hives a registry operates on, plus the implicit read order.
///
/// A table is plain data. Every operation re-expands it, so different tables
/// (for example one per impersonated user) can be used side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveTable {
    pub hives: Vec<HiveDef>,
    /// Read precedence when a path names no hive; earlier entries win
    #[serde(default = "default_priority")]
    pub priority: Vec<String>,
    /// The per-user hive: default write/delete target and ownership scope
    #[serde(default = "default_user_hive")]
    pub user_hive: String,
}

fn default_priority() -> Vec<String> {
    ["HKVM", "HKCU", "HKLM", "HKNS"].iter().map(|s| s.to_string()).collect()
}

fn default_user_hive() -> String {
    HKEY_CURRENT_USER.to_string()
}

impl Default for HiveTable {
    fn default() -> Self {
        Self {
            hives: vec![
                HiveDef::new(HKEY_LOCAL_MACHINE, &["HKLM"], "/opt/aqua/registry"),
                HiveDef::new(HKEY_CURRENT_USER, &["HKCU"], &format!("$HOME/{USER_REGISTRY_DIR}")),
                HiveDef::new(HKEY_VOLATILE_MEMORY, &["HKVM"], "/opt/aqua/vfs/registry"),
                HiveDef::new(
                    HKEY_LOCAL_MACHINE_NOINST,
                    &["HKNS"],
                    "/var/noinstfs/aqua/root.d/registry",
                ),
            ],
            priority: default_priority(),
            user_hive: default_user_hive(),
        }
    }
}

impl HiveTable {
    /// The default table with the per-user hive pointed at `user`'s home directory
    pub fn for_user(user: &str) -> Result<Self> {
        let record = crate::ownership::lookup_user(user)?
            .ok_or_else(|| HiveError::UnknownUser { user: user.to_string() })?;
        let user_dir = record.home.join(USER_REGISTRY_DIR);
        let table = Self::default();
        let user_hive = table.user_hive.clone();
        Ok(table.with_path(&user_hive, &user_dir.to_string_lossy()))
    }

    /// Replace the base directory template of the hive answering to `name`.
    ///
    /// Unknown names leave the table unchanged.
    pub fn with_path(mut self, name: &str, path: &str) -> Self {
        let name = name.trim();
        if let Some(hive) = self.hives.iter_mut().find(|h| h.answers_to(name)) {
            hive.path = path.to_string();
        }
        self
    }

    /// Canonical long name for a long name or alias, `None` if unknown
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.hives
            .iter()
            .find(|h| h.answers_to(name))
            .map(|h| h.name.as_str())
    }

    /// Canonical name of the per-user hive
    pub fn user_hive(&self) -> Result<&str> {
        self.canonical_name(&self.user_hive)
            .ok_or_else(|| HiveError::not_found(&self.user_hive).into())
    }

    /// Precedence list as canonical names, unknown entries dropped
    pub fn priority_order(&self) -> Vec<&str> {
        self.priority
            .iter()
            .filter_map(|entry| {
                self.canonical_name(entry)
                    .or_else(|| self.canonical_name(&entry.to_uppercase()))
            })
            .collect()
    }

    /// Expanded absolute base directory of one hive
    pub fn base_dir(&self, name: &str) -> Option<PathBuf> {
        let canonical = self.canonical_name(name)?;
        self.hives
            .iter()
            .find(|h| h.name == canonical)
            .map(|h| expand_path(&h.path))
    }

    /// Expanded absolute base directories of every hive, keyed by canonical name
    pub fn resolve(&self) -> BTreeMap<String, PathBuf> {
        self.hives
            .iter()
            .map(|h| (h.name.clone(), expand_path(&h.path)))
            .collect()
    }
}
