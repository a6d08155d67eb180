use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::RuntimeResult;

/// How a [`crate::Localizer`] reports translation failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    /// Failures are returned to the caller.
    #[default]
    Strict,
    /// Failures are logged and resolve to empty text.
    Empty,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub locale: String,
    /// Relative paths resolve against the configuration file's directory.
    pub catalog: PathBuf,
    pub catalog_sha256: Option<String>,
    pub error_mode: ErrorMode,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            catalog: PathBuf::from("locales/en.json"),
            catalog_sha256: None,
            error_mode: ErrorMode::Strict,
        }
    }
}

pub fn load_config(path: &Path) -> RuntimeResult<RuntimeConfig> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> RuntimeResult<RuntimeConfig> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(RuntimeConfig::default())
    }
}
