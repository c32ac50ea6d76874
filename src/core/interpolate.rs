//! `{{name}}` placeholder substitution.

use std::{borrow::Cow, collections::BTreeMap, sync::LazyLock};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::Value;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// Named interpolation values passed to a translation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    ///
    /// ```
    /// use glossa::core::{Params, interpolate};
    ///
    /// let params = Params::new().with("name", "Ada").with("count", 3);
    /// assert_eq!(interpolate("{{name}} has {{count}}", Some(&params)), "Ada has 3");
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Replace `{{name}}` placeholders with values from `params`.
///
/// Unknown names are left verbatim. Substituted values are not rescanned.
pub fn interpolate<'a>(text: &'a str, params: Option<&Params>) -> Cow<'a, str> {
    let Some(params) = params else {
        return Cow::Borrowed(text);
    };

    PLACEHOLDER_RE.replace_all(text, |caps: &Captures<'_>| match params.get(&caps[1]) {
        Some(value) => display_value(value),
        None => caps[0].to_string(),
    })
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
