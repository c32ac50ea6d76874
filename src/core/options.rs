//! Translator configuration: the raw host-supplied descriptor and its
//! validated, mutually exclusive form.

use std::sync::Arc;

use serde::Deserialize;

use super::{ConfigurationError, TranslationTree};

/// Locale hints exposed by the host rendering context.
///
/// Both fields are untrusted and optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostContext {
    #[serde(default)]
    pub current_locale: Option<String>,
    #[serde(default)]
    pub params: Option<HostParams>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostParams {
    #[serde(default)]
    pub lang: Option<String>,
}

impl HostContext {
    pub fn with_current_locale(locale: impl Into<String>) -> Self {
        Self {
            current_locale: Some(locale.into()),
            params: None,
        }
    }

    pub fn with_lang(lang: impl Into<String>) -> Self {
        Self {
            current_locale: None,
            params: Some(HostParams {
                lang: Some(lang.into()),
            }),
        }
    }

    pub fn lang(&self) -> Option<&str> {
        self.params.as_ref().and_then(|p| p.lang.as_deref())
    }
}

/// Static-build mode: translations are read from the local source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StaticOptions {
    /// Explicit locale override; wins over every host hint.
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default, alias = "astro")]
    pub host: Option<HostContext>,
}

/// Request-render mode: the caller already resolved the locale and loaded
/// its translations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestOptions {
    pub locale: String,
    pub translations: Arc<TranslationTree>,
}

impl RequestOptions {
    pub fn new(locale: impl Into<String>, translations: impl Into<Arc<TranslationTree>>) -> Self {
        Self {
            locale: locale.into(),
            translations: translations.into(),
        }
    }
}

/// Raw descriptor as handed over by a host. Exactly one field must be set;
/// see [`I18nOptions::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct I18nOptions {
    #[serde(default)]
    pub ssg: Option<StaticOptions>,
    #[serde(default)]
    pub ssr: Option<RequestOptions>,
}

/// Validated configuration: exactly one rendering mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    Static(StaticOptions),
    Request(RequestOptions),
}

impl I18nOptions {
    pub fn ssg(options: StaticOptions) -> Self {
        Self {
            ssg: Some(options),
            ssr: None,
        }
    }

    pub fn ssr(options: RequestOptions) -> Self {
        Self {
            ssg: None,
            ssr: Some(options),
        }
    }

    /// Enforce the exactly-one-mode rule without touching any source.
    pub fn validate(self) -> Result<RenderMode, ConfigurationError> {
        match (self.ssg, self.ssr) {
            (Some(ssg), None) => Ok(RenderMode::Static(ssg)),
            (None, Some(ssr)) => Ok(RenderMode::Request(ssr)),
            (Some(_), Some(_)) => Err(ConfigurationError::BothModes),
            (None, None) => Err(ConfigurationError::NoMode),
        }
    }
}

impl From<StaticOptions> for RenderMode {
    fn from(options: StaticOptions) -> Self {
        Self::Static(options)
    }
}

impl From<RequestOptions> for RenderMode {
    fn from(options: RequestOptions) -> Self {
        Self::Request(options)
    }
}
