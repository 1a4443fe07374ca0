use log::{debug, warn};

use crate::hooks::error::HookError;
use crate::hooks::executor::CommandExecutor;
use crate::kernel::constants::HOOK_PLACEHOLDER;
use crate::kernel::error::Result;

/// Lex a hook command line and substitute `value` for every placeholder.
///
/// Substitution happens after lexing, so a value containing spaces or quotes
/// stays inside the argument that held the placeholder.
pub fn build_argv(line: &str, value: &str) -> Result<Vec<String>> {
    let line = line.trim();
    let parts = shlex::split(line).ok_or_else(|| HookError::Parse {
        line: line.to_string(),
    })?;
    if parts.is_empty() {
        return Err(HookError::EmptyCommand.into());
    }
    Ok(parts
        .into_iter()
        .map(|part| part.replace(HOOK_PLACEHOLDER, value))
        .collect())
}

/// Run `hooks` in order with `value` substituted, logging every failure.
///
/// Returns how many hooks completed successfully.
pub fn dispatch(executor: &dyn CommandExecutor, hooks: &[String], value: &str) -> usize {
    let mut succeeded = 0;
    for line in hooks {
        let outcome = build_argv(line, value).and_then(|argv| executor.execute(&argv));
        match outcome {
            Ok(()) => {
                debug!("Hook '{}' completed", line.trim());
                succeeded += 1;
            }
            Err(e) => warn!("Failed to execute hook '{}': {}", line.trim(), e),
        }
    }
    succeeded
}
