use std::fmt::Debug;
use std::process::Command;

use crate::hooks::error::HookError;
use crate::kernel::error::Result;

/// Runs a hook's argument vector.
///
/// `argv[0]` is the program; no shell is involved, so arguments reach the
/// program exactly as given.
pub trait CommandExecutor: Send + Sync + Debug {
    fn execute(&self, argv: &[String]) -> Result<()>;
}

/// Spawns the hook as a child process and waits for it
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl CommandExecutor for ProcessExecutor {
    fn execute(&self, argv: &[String]) -> Result<()> {
        let (program, args) = argv.split_first().ok_or(HookError::EmptyCommand)?;

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| HookError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(HookError::NonZeroExit {
                program: program.clone(),
                status: status.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
