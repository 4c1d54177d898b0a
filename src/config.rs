use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::TilesetError;

/// Controls how a [`crate::TsxWriter`] lays out its output.
/// Every key is optional when loaded from YAML.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// TSX schema version stamped on the root element.
    pub version: String,
    /// Tiled editor version stamped on the root element.
    pub tiled_version: String,
    /// Spaces per nesting level.
    pub indent: usize,
    pub xml_declaration: bool,
    pub trailing_newline: bool,
    /// Refuse to write tilesets that fail validation.
    pub validate: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            version: String::from("1.10"),
            tiled_version: String::from("1.11.2"),
            indent: 1,
            xml_declaration: true,
            trailing_newline: true,
            validate: true,
        }
    }
}

impl WriterConfig {

    pub fn from_yaml_str(yaml: &str) -> Result<Self, TilesetError> {
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TilesetError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        log::debug!("Loaded writer config from {}", path.display());
        Ok(config)
    }
}
