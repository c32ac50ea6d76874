//! Per-locale translation cache.

use std::{
    collections::HashMap,
    env,
    path::{Path, PathBuf},
    sync::Arc,
};

use super::{I18nError, LoadError, TranslationTree, is_valid_locale};

/// Environment variable that switches the store to [`CachePolicy::Refresh`].
pub const DEV_MODE_ENV: &str = "GLOSSA_DEV";

/// Directory translation files are read from when nothing else is configured.
pub const DEFAULT_MESSAGES_ROOT: &str = "./i18n";

/// Where translation trees come from.
pub trait TranslationSource {
    fn read(&self, locale: &str) -> Result<TranslationTree, LoadError>;
}

/// Reads `<root>/<locale>.json` from disk.
///
/// Locales that could name a path outside `root` are rejected before the
/// filesystem is touched.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, locale: &str) -> PathBuf {
        self.root.join(format!("{locale}.json"))
    }
}

impl Default for FsSource {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGES_ROOT)
    }
}

impl TranslationSource for FsSource {
    fn read(&self, locale: &str) -> Result<TranslationTree, LoadError> {
        if !is_valid_locale(locale) {
            return Err(LoadError::InvalidLocale {
                locale: locale.to_string(),
            });
        }
        TranslationTree::from_file(&self.path_for(locale))
    }
}

/// Whether loaded trees are served from the cache on later lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Read each locale once per store lifetime.
    #[default]
    Retain,
    /// Re-read on every lookup, overwriting the cached entry.
    Refresh,
}

impl CachePolicy {
    /// `Refresh` when [`DEV_MODE_ENV`] holds a truthy value, `Retain` otherwise.
    pub fn from_env() -> Self {
        Self::from_flag(env::var(DEV_MODE_ENV).ok().as_deref())
    }

    fn from_flag(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Self::Refresh,
            _ => Self::Retain,
        }
    }
}

/// Cache of translation trees keyed by locale, backed by a
/// [`TranslationSource`].
///
/// Lookups take `&mut self`; a store shared between threads must be wrapped
/// in a lock by the host since a miss is a read-then-fill sequence.
#[derive(Debug)]
pub struct TranslationStore<S = FsSource> {
    source: S,
    policy: CachePolicy,
    cache: HashMap<String, Arc<TranslationTree>>,
}

impl TranslationStore<FsSource> {
    /// File-backed store rooted at `root` with the policy taken from the
    /// environment.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self::new(FsSource::new(root), CachePolicy::from_env())
    }
}

impl<S: TranslationSource> TranslationStore<S> {
    pub fn new(source: S, policy: CachePolicy) -> Self {
        Self {
            source,
            policy,
            cache: HashMap::new(),
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the tree for `locale`, reading the source according to the
    /// cache policy.
    pub fn load(&mut self, locale: &str) -> Result<Arc<TranslationTree>, I18nError> {
        if self.policy == CachePolicy::Retain
            && let Some(tree) = self.cache.get(locale)
        {
            tracing::debug!(locale, "translation cache hit");
            return Ok(Arc::clone(tree));
        }

        tracing::debug!(locale, policy = ?self.policy, "reading translation source");
        let tree = self
            .source
            .read(locale)
            .map(Arc::new)
            .map_err(|source| I18nError::Load {
                locale: locale.to_string(),
                source,
            })?;
        self.cache.insert(locale.to_string(), Arc::clone(&tree));
        Ok(tree)
    }

    /// Load `locale`, retrying with `override_locale` if that fails and the
    /// two differ. Returns the locale that was actually loaded.
    pub fn load_with_fallback(
        &mut self,
        locale: &str,
        override_locale: Option<&str>,
    ) -> Result<(String, Arc<TranslationTree>), I18nError> {
        match self.load(locale) {
            Ok(tree) => Ok((locale.to_string(), tree)),
            Err(err) => match override_locale {
                Some(fallback) if fallback != locale => {
                    tracing::warn!(
                        locale,
                        fallback,
                        error = %err,
                        "falling back to explicitly configured locale"
                    );
                    let tree = self.load(fallback)?;
                    Ok((fallback.to_string(), tree))
                }
                _ => Err(err),
            },
        }
    }

    pub fn is_cached(&self, locale: &str) -> bool {
        self.cache.contains_key(locale)
    }

    /// Locales currently held in the cache, sorted.
    pub fn cached_locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.cache.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
