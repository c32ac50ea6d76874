use super::RenderMode;

/// Locale used when neither the configuration nor the host supplies one.
pub const DEFAULT_LOCALE: &str = "en";

/// Whether `locale` is usable as a file stem inside the messages root.
///
/// Host hints are untrusted, so anything empty or containing a path
/// separator or a `.`/`..` component is rejected.
pub fn is_valid_locale(locale: &str) -> bool {
    !locale.trim().is_empty()
        && !locale.contains(['/', '\\', '\0'])
        && locale != "."
        && locale != ".."
}

/// Determine the active locale for a rendering mode.
///
/// Precedence, first present value wins:
/// 1. request mode's locale
/// 2. static mode's explicit override
/// 3. host `currentLocale`
/// 4. host `params.lang`
/// 5. [`DEFAULT_LOCALE`]
pub fn resolve_locale(mode: &RenderMode) -> String {
    match mode {
        RenderMode::Request(options) => options.locale.clone(),
        RenderMode::Static(options) => {
            let host = options.host.as_ref();
            options
                .locale
                .as_deref()
                .or_else(|| host.and_then(|h| h.current_locale.as_deref()))
                .or_else(|| host.and_then(|h| h.lang()))
                .unwrap_or(DEFAULT_LOCALE)
                .to_string()
        }
    }
}
