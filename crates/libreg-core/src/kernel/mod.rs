//! # Libreg Core Kernel
//!
//! Shared definitions used by every registry subsystem.
//!
//! ## Key Components:
//!
//! - **Core Constants**: file suffixes, default hive names, the hook key and
//!   the user registry location, in the `constants` submodule.
//! - **Error Handling**: the aggregated [`Error`](error::Error) type and the
//!   crate `Result` alias in the `error` submodule.
pub mod constants;
pub mod error;

pub use error::{Error, Result};
