//! # Registry Paths
//!
//! Registry paths are `/`-separated. When the first segment names a hive
//! (long name or short alias) that hive is selected explicitly; otherwise the
//! path is resolved implicitly across the hive precedence list.
//!
//! Segments are percent-encoded on their way to disk, see [`codec`].
pub mod codec;

pub use codec::{decode_segment, encode_segment, encoded_path};

use crate::hive::HiveTable;

/// A registry path split into its optional explicit hive and the hive-relative rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryPath {
    /// Canonical long name of the explicitly selected hive, if any
    pub hive: Option<String>,
    /// Path relative to the hive root, without a leading separator
    pub relative: String,
}

impl RegistryPath {
    pub fn is_explicit(&self) -> bool {
        self.hive.is_some()
    }
}

/// Split `path` into an explicit hive selector and the relative remainder.
///
/// A leading `/` is ignored. If the first segment is not a known hive name the
/// whole (normalized) path is returned as relative and `hive` is `None`.
pub fn classify(path: &str, table: &HiveTable) -> RegistryPath {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, rest),
        None => (trimmed, ""),
    };

    match table.canonical_name(first) {
        Some(hive) => RegistryPath {
            hive: Some(hive.to_string()),
            relative: rest.to_string(),
        },
        None => RegistryPath {
            hive: None,
            relative: trimmed.to_string(),
        },
    }
}
