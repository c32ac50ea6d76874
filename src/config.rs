use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_LOCALE, is_valid_locale, store::DEFAULT_MESSAGES_ROOT};

pub const CONFIG_FILE_NAME: &str = ".glossarc.json";

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "GLOSSA_LOG";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default = "default_base_locale")]
    pub base_locale: String,
}

fn default_messages_root() -> String {
    DEFAULT_MESSAGES_ROOT.to_string()
}

fn default_base_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            base_locale: default_base_locale(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The base locale doubles as a file name, so it must be non-empty and
    /// free of path separators.
    pub fn validate(&self) -> Result<()> {
        validate_locale(&self.base_locale).context("Invalid 'baseLocale' in config")?;
        if self.messages_root.trim().is_empty() {
            bail!("'messagesRoot' must not be empty");
        }
        Ok(())
    }
}

pub fn validate_locale(locale: &str) -> Result<()> {
    if locale.trim().is_empty() {
        bail!("locale must not be empty");
    }
    if !is_valid_locale(locale) {
        bail!("locale \"{}\" is not a valid file name", locale);
    }
    Ok(())
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config are resolved against.
    pub root: PathBuf,
}

impl ConfigLoadResult {
    pub fn messages_root(&self) -> PathBuf {
        self.root.join(&self.config.messages_root)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            tracing::debug!(config = ?path, "loaded configuration");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            root: start_dir.to_path_buf(),
        }),
    }
}
