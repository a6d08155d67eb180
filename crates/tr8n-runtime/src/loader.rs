use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{RuntimeError, RuntimeResult};
use crate::source::CatalogSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> RuntimeResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(CatalogFormat::Json),
            Some("toml") => Ok(CatalogFormat::Toml),
            _ => Err(RuntimeError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

pub fn parse_catalog(contents: &str, format: CatalogFormat) -> RuntimeResult<CatalogSource> {
    match format {
        CatalogFormat::Json => Ok(serde_json::from_str(contents)?),
        CatalogFormat::Toml => Ok(toml::from_str(contents)?),
    }
}

/// Reads a catalog file, checking its SHA-256 first when `expected_hash` is set.
pub fn load_catalog(path: &Path, expected_hash: Option<&str>) -> RuntimeResult<CatalogSource> {
    let format = CatalogFormat::from_path(path)?;
    let bytes = fs::read(path)?;
    if let Some(expected_hash) = expected_hash {
        let expected = parse_sha256(expected_hash)?;
        if sha256(&bytes) != expected {
            return Err(RuntimeError::HashMismatch(path.display().to_string()));
        }
    }

    let contents = String::from_utf8(bytes)?;
    let source = parse_catalog(&contents, format)?;
    debug!(
        path = %path.display(),
        locale = source.locale.as_deref().unwrap_or(""),
        messages = source.messages.len(),
        "loaded catalog"
    );
    Ok(source)
}

pub fn parse_sha256(value: &str) -> RuntimeResult<[u8; 32]> {
    let trimmed = value.trim();
    let hex = trimmed.strip_prefix("sha256:").unwrap_or(trimmed);
    let bytes = hex::decode(hex).map_err(|_| RuntimeError::InvalidHash)?;
    if bytes.len() != 32 {
        return Err(RuntimeError::InvalidHash);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    Ok(out)
}

pub(crate) fn sha256(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}
