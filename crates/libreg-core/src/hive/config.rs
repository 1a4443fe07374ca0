use std::path::Path;

use serde_json;
#[cfg(feature = "yaml-config")]
use serde_yaml;
#[cfg(feature = "toml-config")]
use toml;

use crate::hive::error::HiveError;
use crate::hive::table::HiveTable;
use crate::kernel::error::{Error, Result};

/// Supported hive table file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

impl HiveTable {
    /// Parse a hive table from text in the given format
    pub fn parse(data: &str, format: ConfigFormat) -> Result<Self> {
        let parsed: HiveTable = match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| deserialization("json", e)),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| deserialization("yaml", e)),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| deserialization("toml", e)),
        }?;
        Ok(parsed)
    }

    /// Load a hive table from a file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| HiveError::UnsupportedConfigFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(e, "read_hive_table", path.to_path_buf()))?;
        Self::parse(&content, format)
    }
}

fn deserialization<E>(format: &str, source: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error::Hive(HiveError::DeserializationError {
        format: format.to_string(),
        source: Box::new(source),
    })
}
