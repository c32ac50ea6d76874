//! Dotted key resolution against a translation tree.

use serde_json::Value;

use super::{I18nError, TranslationTree};

/// Maximum number of key segments walked before giving up. The key-set
/// validator flattens to the same depth, so every key it reports resolves.
pub const MAX_DEPTH: usize = 32;

/// Resolve a dotted key (`"nav.home.title"`) to its leaf string.
///
/// Any missing segment, non-object intermediate or non-string leaf is
/// reported as [`I18nError::MissingKey`] carrying both the key and `locale`.
/// The raw key is never returned in place of a translation.
///
/// Segments are taken literally, the empty one included: `""` names the
/// root entry keyed `""` and `"a."` names the `""` entry under `a`.
pub fn resolve_key<'a>(
    tree: &'a TranslationTree,
    key: &str,
    locale: &str,
) -> Result<&'a str, I18nError> {
    let missing = || I18nError::MissingKey {
        key: key.to_string(),
        locale: locale.to_string(),
    };

    let mut segments = key.split('.');
    let first = segments.next().ok_or_else(missing)?;
    let mut current = tree.get(first).ok_or_else(missing)?;

    for (depth, segment) in segments.enumerate() {
        if depth + 1 >= MAX_DEPTH {
            return Err(missing());
        }
        current = match current {
            Value::Object(map) => map.get(segment).ok_or_else(missing)?,
            _ => return Err(missing()),
        };
    }

    current.as_str().ok_or_else(missing)
}
