#![forbid(unsafe_code)]

mod config;
mod error;
mod loader;
mod localizer;
mod source;

pub use crate::config::{ErrorMode, RuntimeConfig, load_config, load_config_or_default};
pub use crate::error::{RuntimeError, RuntimeResult};
pub use crate::loader::{CatalogFormat, load_catalog, parse_catalog, parse_sha256};
pub use crate::localizer::Localizer;
pub use crate::source::{CatalogSource, MessageSource, PluralCaseSource};
