//! # Write Hooks
//!
//! Commands registered under the hook key run after a value is committed,
//! with `{}` in their arguments replaced by the new serialized value.
pub mod dispatcher;
pub mod error;
pub mod executor;

pub use dispatcher::{build_argv, dispatch};
pub use error::HookError;
pub use executor::{CommandExecutor, ProcessExecutor};
