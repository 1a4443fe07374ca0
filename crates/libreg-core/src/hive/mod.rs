//! # Hive Table
//!
//! Maps hive names (long names and short aliases) to base directories and
//! defines the precedence used when a registry path names no hive.
//!
//! The table is an ordinary value handed to each [`Registry`](crate::Registry);
//! base directory templates are expanded on every call, never cached.
pub mod config;
pub mod error;
pub mod expand;
pub mod table;

pub use config::ConfigFormat;
pub use error::HiveError;
pub use expand::{expand_path, expand_path_with};
pub use table::{HiveDef, HiveTable};
