use std::{io, path::PathBuf};

use thiserror::Error;

/// Violations of the exactly-one-of-two rendering modes rule.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("You must provide either an 'ssg' or 'ssr' configuration object.")]
    NoMode,
    #[error(
        "You cannot provide both 'ssg' and 'ssr' configurations. Choose one based on your rendering strategy."
    )]
    BothModes,
}

/// Why a translation source could not produce a tree.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Invalid locale identifier: \"{locale}\"")]
    InvalidLocale { locale: String },
    #[error("Failed to read translation file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse translation file: {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Translation file root must be an object: {}", .path.display())]
    NotATree { path: PathBuf },
}

/// Errors surfaced by the translator facade.
#[derive(Error, Debug)]
pub enum I18nError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("Translations for locale '{locale}' could not be loaded")]
    Load {
        locale: String,
        #[source]
        source: LoadError,
    },
    #[error("Missing translation key: \"{key}\" for locale: \"{locale}\".")]
    MissingKey { key: String, locale: String },
}

/// Fatal errors of the key-set validator. Key mismatches are not errors.
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error(
        "Messages directory '{}' does not exist.\nHint: Check your .glossarc.json 'messagesRoot' setting.",
        .0.display()
    )]
    MissingDirectory(PathBuf),
    #[error("'{}' is not a directory.", .0.display())]
    NotADirectory(PathBuf),
    #[error("Base locale file '{locale}.json' not found in '{}'.", .dir.display())]
    MissingBase { locale: String, dir: PathBuf },
    #[error("Failed to list '{}'", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Load(#[from] LoadError),
}
