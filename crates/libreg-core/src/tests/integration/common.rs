#![cfg(test)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::{TempDir, tempdir};

use crate::hive::{HiveDef, HiveTable};
use crate::hooks::{CommandExecutor, HookError};
use crate::kernel::constants::{
    HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, HKEY_LOCAL_MACHINE_NOINST, HKEY_VOLATILE_MEMORY,
};
use crate::kernel::error::Result;
use crate::ownership::{OwnershipSetter, UserRecord};
use crate::registry::Registry;

// ===== MOCK SEAMS =====

/// Records every hook invocation instead of spawning processes
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub runs: Mutex<Vec<Vec<String>>>,
    /// Programs that report a non-zero exit
    pub failing: Vec<String>,
}

impl RecordingExecutor {
    pub fn failing(programs: &[&str]) -> Self {
        Self {
            failing: programs.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn runs(&self) -> Vec<Vec<String>> {
        self.runs.lock().unwrap().clone()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, argv: &[String]) -> Result<()> {
        self.runs.lock().unwrap().push(argv.to_vec());
        let program = argv.first().cloned().unwrap_or_default();
        if self.failing.contains(&program) {
            return Err(HookError::NonZeroExit {
                program,
                status: "exit status: 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Knows a fixed set of users and records ownership changes
#[derive(Debug, Default)]
pub struct RecordingOwnership {
    pub users: Vec<UserRecord>,
    pub changes: Mutex<Vec<(PathBuf, u32)>>,
}

impl RecordingOwnership {
    pub fn with_user(name: &str, uid: u32) -> Self {
        Self {
            users: vec![UserRecord {
                name: name.to_string(),
                uid,
                gid: uid,
                home: PathBuf::from("/home").join(name),
            }],
            ..Default::default()
        }
    }

    pub fn changes(&self) -> Vec<(PathBuf, u32)> {
        self.changes.lock().unwrap().clone()
    }
}

impl OwnershipSetter for RecordingOwnership {
    fn resolve_user(&self, name: &str) -> Result<Option<UserRecord>> {
        Ok(self.users.iter().find(|u| u.name == name).cloned())
    }

    fn set_owner(&self, path: &Path, user: &UserRecord) -> Result<()> {
        self.changes.lock().unwrap().push((path.to_path_buf(), user.uid));
        Ok(())
    }
}

// ===== FIXTURE =====

/// A registry whose four default hives live in a temp directory
pub struct Fixture {
    pub dir: TempDir,
    pub registry: Registry,
    pub executor: Arc<RecordingExecutor>,
    pub ownership: Arc<RecordingOwnership>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_seams(
            RecordingExecutor::default(),
            RecordingOwnership::with_user("alice", 1000),
        )
    }

    pub fn with_seams(executor: RecordingExecutor, ownership: RecordingOwnership) -> Self {
        let dir = tempdir().expect("Failed to create temp directory");
        let table = table_in(dir.path());
        let executor = Arc::new(executor);
        let ownership = Arc::new(ownership);
        let registry = Registry::new(table)
            .with_executor(executor.clone())
            .with_ownership(ownership.clone());
        Self {
            dir,
            registry,
            executor,
            ownership,
        }
    }

    /// Base directory of a hive, by long name
    pub fn hive_dir(&self, long_name: &str) -> PathBuf {
        self.dir.path().join(long_name)
    }

    pub fn hklm(&self) -> PathBuf {
        self.hive_dir(HKEY_LOCAL_MACHINE)
    }

    pub fn hkcu(&self) -> PathBuf {
        self.hive_dir(HKEY_CURRENT_USER)
    }

    pub fn hkvm(&self) -> PathBuf {
        self.hive_dir(HKEY_VOLATILE_MEMORY)
    }
}

/// The default hive layout, rooted under `root` with one directory per hive
pub fn table_in(root: &Path) -> HiveTable {
    let dir = |name: &str| root.join(name).to_string_lossy().into_owned();
    HiveTable {
        hives: vec![
            HiveDef::new(HKEY_LOCAL_MACHINE, &["HKLM"], &dir(HKEY_LOCAL_MACHINE)),
            HiveDef::new(HKEY_CURRENT_USER, &["HKCU"], &dir(HKEY_CURRENT_USER)),
            HiveDef::new(HKEY_VOLATILE_MEMORY, &["HKVM"], &dir(HKEY_VOLATILE_MEMORY)),
            HiveDef::new(HKEY_LOCAL_MACHINE_NOINST, &["HKNS"], &dir(HKEY_LOCAL_MACHINE_NOINST)),
        ],
        ..HiveTable::default()
    }
}
