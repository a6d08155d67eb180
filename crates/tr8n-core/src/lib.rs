#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod args;
mod chain;
mod config;
mod error;
mod interpolate;
mod lenient;
mod plural;
mod table;
mod text;
mod translator;

pub use args::TransArgs;
pub use chain::TranslatorChain;
pub use config::MessageConfig;
pub use error::{ErrorKind, Tr8nError, Tr8nResult};
pub use interpolate::{Placeholder, Placeholders, interpolate, placeholders};
pub use lenient::Lenient;
pub use plural::PluralCase;
pub use table::MessageTable;
pub use text::Text;
pub use translator::{SimpleTranslator, Translator};
