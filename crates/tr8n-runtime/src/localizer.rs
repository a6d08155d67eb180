use std::path::{Path, PathBuf};

use tr8n_core::{MessageTable, SimpleTranslator, TransArgs, Tr8nResult, Translator};
use tracing::{debug, warn};

use crate::config::{ErrorMode, RuntimeConfig, load_config_or_default};
use crate::error::RuntimeResult;
use crate::loader::load_catalog;

/// A loaded catalog for one locale, with the configured failure policy applied.
pub struct Localizer {
    locale: String,
    translator: SimpleTranslator,
    error_mode: ErrorMode,
}

impl Localizer {
    pub fn new(locale: impl Into<String>, table: MessageTable, error_mode: ErrorMode) -> Self {
        Self {
            locale: locale.into(),
            translator: SimpleTranslator::new(table),
            error_mode,
        }
    }

    pub fn from_config(config: &RuntimeConfig, base_dir: &Path) -> RuntimeResult<Self> {
        let catalog_path = base_dir.join(&config.catalog);
        let source = load_catalog(&catalog_path, config.catalog_sha256.as_deref())?;
        if let Some(locale) = source.locale.as_deref() {
            if locale != config.locale {
                debug!(
                    configured = %config.locale,
                    catalog = locale,
                    "catalog locale differs from configured locale"
                );
            }
        }
        let table = source.to_table()?;
        debug!(
            locale = %config.locale,
            messages = table.len(),
            error_mode = ?config.error_mode,
            "localizer ready"
        );
        Ok(Self::new(config.locale.clone(), table, config.error_mode))
    }

    /// Loads the configuration at `path`, falling back to defaults when the
    /// file is absent. The catalog path resolves against the file's directory.
    pub fn load_from_config_path(path: &Path) -> RuntimeResult<Self> {
        let config = load_config_or_default(path)?;
        let base_dir = path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::from_config(&config, &base_dir)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    pub fn table(&self) -> &MessageTable {
        self.translator.table()
    }

    fn settle(&self, id: &str, result: Tr8nResult<String>) -> Tr8nResult<String> {
        match (result, self.error_mode) {
            (Err(err), ErrorMode::Empty) => {
                warn!(id, kind = ?err.kind(), error = %err, "translation failed");
                Ok(String::new())
            }
            (result, _) => result,
        }
    }
}

impl Translator for Localizer {
    fn translate(&self, id: &str) -> Tr8nResult<String> {
        self.settle(id, self.translator.translate(id))
    }

    fn translate_with(&self, id: &str, args: &TransArgs) -> Tr8nResult<String> {
        self.settle(id, self.translator.translate_with(id, args))
    }

    fn translate_plural(&self, id: &str, count: u32, args: &TransArgs) -> Tr8nResult<String> {
        self.settle(id, self.translator.translate_plural(id, count, args))
    }
}
