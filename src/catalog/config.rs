use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CatalogError;

pub const DEFAULT_DOCUMENT: &str = "docs/design-patterns.md";

/// `catalog.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub document: PathBuf,
    /// Section titles that must each carry prose and exactly one sample.
    pub required_sections: Vec<String>,
    /// Fence language every sample must declare.
    pub language: String,
    /// Extra names samples may use without defining, on top of the prelude.
    pub known_types: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            required_sections: vec!["Adapter".into(), "Bridge".into(), "Builder".into()],
            language: "rust".to_string(),
            known_types: Vec::new(),
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|err| CatalogError::io(path, err))?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when it exists, otherwise falls back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, CatalogError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
