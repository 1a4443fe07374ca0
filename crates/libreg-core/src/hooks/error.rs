//! # Libreg Hook Errors
//!
//! Failures of a single write hook. They are logged as warnings by the
//! dispatcher and never undo the write that triggered the hook.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("Hook command line could not be lexed: '{line}'")]
    Parse { line: String },

    #[error("Hook command line is empty")]
    EmptyCommand,

    #[error("Failed to spawn hook program '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Hook program '{program}' exited unsuccessfully ({status})")]
    NonZeroExit { program: String, status: String },
}
