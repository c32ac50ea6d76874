use std::sync::Arc;

use super::{
    I18nError, I18nOptions, Params, RenderMode, TranslationSource, TranslationStore,
    TranslationTree, interpolate, resolve_key, resolve_locale,
};

/// A locale and its translations, ready to answer `t(key, params)` calls.
///
/// ```
/// use glossa::core::{I18nOptions, Params, RequestOptions, TranslationTree, Translator, TranslationStore};
/// use serde_json::json;
///
/// let tree = TranslationTree::from_value(json!({"greeting": "Hi {{name}}"})).unwrap();
/// let mut store = TranslationStore::from_dir("./i18n");
/// let i18n = Translator::new(I18nOptions::ssr(RequestOptions::new("en", tree)), &mut store).unwrap();
///
/// let params = Params::new().with("name", "Ada");
/// assert_eq!(i18n.t("greeting", Some(&params)).unwrap(), "Hi Ada");
/// assert_eq!(i18n.locale(), "en");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    locale: String,
    tree: Arc<TranslationTree>,
}

impl Translator {
    /// Validate `options`, resolve the locale and load its translations.
    ///
    /// Configuration errors are returned before any source is consulted.
    pub fn new<S: TranslationSource>(
        options: I18nOptions,
        store: &mut TranslationStore<S>,
    ) -> Result<Self, I18nError> {
        let mode = options.validate()?;
        Self::from_mode(mode, store)
    }

    pub fn from_mode<S: TranslationSource>(
        mode: RenderMode,
        store: &mut TranslationStore<S>,
    ) -> Result<Self, I18nError> {
        let locale = resolve_locale(&mode);
        match mode {
            RenderMode::Request(options) => Ok(Self {
                locale,
                tree: options.translations,
            }),
            RenderMode::Static(options) => {
                let (locale, tree) = store.load_with_fallback(&locale, options.locale.as_deref())?;
                Ok(Self { locale, tree })
            }
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn tree(&self) -> &TranslationTree {
        &self.tree
    }

    /// Translate `key`, interpolating `params` into the result.
    pub fn t(&self, key: &str, params: Option<&Params>) -> Result<String, I18nError> {
        let text = resolve_key(&self.tree, key, &self.locale)?;
        Ok(interpolate(text, params).into_owned())
    }

    /// Whether `key` resolves to a string in the active locale.
    pub fn has(&self, key: &str) -> bool {
        resolve_key(&self.tree, key, &self.locale).is_ok()
    }
}
