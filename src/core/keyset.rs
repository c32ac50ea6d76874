//! Cross-locale key-set validation.
//!
//! Every locale file in a directory is flattened into its set of dotted leaf
//! keys and compared with the base locale. A locale is in sync when it has no
//! missing and no extra keys; values are never compared.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use super::{TranslationTree, ValidateError, resolve::MAX_DEPTH};

/// Extension of translation files picked up by [`validate`].
pub const LOCALE_FILE_EXTENSION: &str = "json";

/// Key differences of one locale against the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleReport {
    pub locale: String,
    /// Keys present in the base but not in this locale.
    pub missing: BTreeSet<String>,
    /// Keys present in this locale but not in the base.
    pub extra: BTreeSet<String>,
}

impl LocaleReport {
    pub fn is_in_sync(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub base_locale: String,
    /// One entry per non-base locale, sorted by locale.
    pub locales: Vec<LocaleReport>,
}

impl ValidationReport {
    pub fn is_in_sync(&self) -> bool {
        self.locales.iter().all(LocaleReport::is_in_sync)
    }

    pub fn out_of_sync(&self) -> impl Iterator<Item = &LocaleReport> {
        self.locales.iter().filter(|l| !l.is_in_sync())
    }

    /// Number of locale files compared, base included.
    pub fn locale_files_checked(&self) -> usize {
        self.locales.len() + 1
    }
}

/// Flatten a tree into its dotted leaf keys.
///
/// Nested objects extend the prefix; anything else (strings, arrays, numbers,
/// booleans, null) ends the path. Empty objects contribute no keys. Objects
/// nested deeper than [`MAX_DEPTH`] segments are reported as a single key.
pub fn flatten_keys(tree: &TranslationTree) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let mut stack: Vec<(String, &Value, usize)> = tree
        .as_map()
        .iter()
        .map(|(key, value)| (key.clone(), value, 1))
        .collect();

    while let Some((prefix, value, depth)) = stack.pop() {
        match value {
            Value::Object(map) if depth < MAX_DEPTH => {
                for (key, child) in map {
                    stack.push((format!("{prefix}.{key}"), child, depth + 1));
                }
            }
            Value::Object(_) => {
                tracing::warn!(key = %prefix, "translation tree too deep, truncating");
                keys.insert(prefix);
            }
            _ => {
                keys.insert(prefix);
            }
        }
    }

    keys
}

/// Compare one locale's keys with the base keys.
pub fn compare_keys(
    locale: &str,
    base: &BTreeSet<String>,
    current: &BTreeSet<String>,
) -> LocaleReport {
    LocaleReport {
        locale: locale.to_string(),
        missing: base.difference(current).cloned().collect(),
        extra: current.difference(base).cloned().collect(),
    }
}

/// Extracts locale from a translation filename.
///
/// - "en.json" -> Some("en")
/// - "/path/to/i18n/pt-BR.json" -> Some("pt-BR")
/// - "notes.txt" -> None
pub fn locale_from_path(path: &Path) -> Option<String> {
    if path.extension().and_then(|e| e.to_str()) != Some(LOCALE_FILE_EXTENSION) {
        return None;
    }
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// List `(locale, path)` pairs for every translation file in `dir`, sorted
/// by locale. Subdirectories are not searched.
pub fn scan_locale_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, ValidateError> {
    if !dir.exists() {
        return Err(ValidateError::MissingDirectory(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ValidateError::NotADirectory(dir.to_path_buf()));
    }

    let read_dir_err = |source| ValidateError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file()
            && let Some(locale) = locale_from_path(&path)
        {
            files.push((locale, path));
        }
    }
    files.sort();
    Ok(files)
}

/// Validate every locale file in `dir` against `base_locale`.
///
/// Unreadable or malformed files and a missing base file are errors; key
/// mismatches are reported in the returned [`ValidationReport`].
pub fn validate(dir: &Path, base_locale: &str) -> Result<ValidationReport, ValidateError> {
    let files = scan_locale_files(dir)?;

    let base_path = files
        .iter()
        .find(|(locale, _)| locale == base_locale)
        .map(|(_, path)| path)
        .ok_or_else(|| ValidateError::MissingBase {
            locale: base_locale.to_string(),
            dir: dir.to_path_buf(),
        })?;
    let base_keys = flatten_keys(&TranslationTree::from_file(base_path)?);
    tracing::debug!(base_locale, keys = base_keys.len(), "loaded base locale");

    let mut locales = Vec::new();
    for (locale, path) in &files {
        if locale == base_locale {
            continue;
        }
        let keys = flatten_keys(&TranslationTree::from_file(path)?);
        let report = compare_keys(locale, &base_keys, &keys);
        tracing::debug!(
            locale = %locale,
            missing = report.missing.len(),
            extra = report.extra.len(),
            "compared locale"
        );
        locales.push(report);
    }

    Ok(ValidationReport {
        base_locale: base_locale.to_string(),
        locales,
    })
}
