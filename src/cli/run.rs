use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::args::Arguments;
use crate::config::{load_config, validate_locale};
use crate::core::{ValidationReport, validate};

/// Resolved inputs of a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub messages_root: PathBuf,
    pub base_locale: String,
}

/// Merge CLI flags over the config file found from `cwd`.
pub fn settings(args: &Arguments, cwd: &Path) -> Result<RunSettings> {
    let loaded = load_config(cwd)?;
    if loaded.from_file {
        tracing::debug!(root = ?loaded.root, "using config file");
    }

    let base_locale = match &args.base_locale {
        Some(locale) => {
            validate_locale(locale).context("Invalid value for '--base'")?;
            locale.clone()
        }
        None => loaded.config.base_locale.clone(),
    };

    let messages_root = match &args.messages_root {
        Some(dir) => cwd.join(dir),
        None => loaded.messages_root(),
    };

    Ok(RunSettings {
        messages_root,
        base_locale,
    })
}

pub fn run(args: &Arguments, cwd: &Path) -> Result<ValidationReport> {
    let settings = settings(args, cwd)?;
    tracing::debug!(
        messages_root = ?settings.messages_root,
        base_locale = %settings.base_locale,
        "validating translation files"
    );
    let report = validate(&settings.messages_root, &settings.base_locale)?;
    Ok(report)
}
