//! Translation engine.
//!
//! - `options`: configuration descriptor and its validated [`RenderMode`]
//! - `locale`: active locale precedence
//! - `store`: cached, policy-driven loading of translation trees
//! - `resolve` / `interpolate`: key lookup and `{{name}}` substitution
//! - `translator`: facade tying the above together
//! - `keyset`: offline comparison of key sets across locale files

mod error;
pub mod interpolate;
pub mod keyset;
pub mod locale;
pub mod options;
pub mod resolve;
pub mod store;
mod translator;
mod tree;

pub use error::{ConfigurationError, I18nError, LoadError, ValidateError};
pub use interpolate::{Params, interpolate};
pub use keyset::{LocaleReport, ValidationReport, flatten_keys, validate};
pub use locale::{DEFAULT_LOCALE, is_valid_locale, resolve_locale};
pub use options::{HostContext, HostParams, I18nOptions, RenderMode, RequestOptions, StaticOptions};
pub use resolve::resolve_key;
pub use store::{CachePolicy, FsSource, TranslationSource, TranslationStore};
pub use translator::Translator;
pub use tree::TranslationTree;
