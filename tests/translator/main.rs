//! End-to-end translator behavior against locale files on disk.

use std::fs;

use anyhow::Result;
use glossa::core::{
    CachePolicy, FsSource, HostContext, I18nError, I18nOptions, LoadError, Params,
    StaticOptions, TranslationStore, Translator,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn site(locales: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for (locale, content) in locales {
        fs::write(dir.path().join(format!("{locale}.json")), content)?;
    }
    Ok(dir)
}

fn ssg(locale: Option<&str>, host: Option<HostContext>) -> I18nOptions {
    I18nOptions::ssg(StaticOptions {
        locale: locale.map(String::from),
        host,
    })
}

#[test]
fn test_static_build_from_files() -> Result<()> {
    let dir = site(&[
        ("en", r#"{"home": {"title": "Welcome, {{name}}!"}}"#),
        ("pt", r#"{"home": {"title": "Bem-vindo, {{name}}!"}}"#),
    ])?;
    let mut store = TranslationStore::new(FsSource::new(dir.path()), CachePolicy::Retain);

    let i18n = Translator::new(ssg(None, Some(HostContext::with_lang("pt"))), &mut store)?;
    let params = Params::new().with("name", "Ana");

    assert_eq!(i18n.locale(), "pt");
    assert_eq!(i18n.t("home.title", Some(&params))?, "Bem-vindo, Ana!");
    assert_eq!(i18n.t("home.title", None)?, "Bem-vindo, {{name}}!");

    Ok(())
}

#[test]
fn test_override_wins_and_absent_hint_is_never_loaded() -> Result<()> {
    let dir = site(&[("en", r#"{"title": "Home"}"#)])?;
    let mut store = TranslationStore::new(FsSource::new(dir.path()), CachePolicy::Retain);

    let i18n = Translator::new(
        ssg(Some("en"), Some(HostContext::with_current_locale("xx"))),
        &mut store,
    )?;

    assert_eq!(i18n.locale(), "en");
    assert_eq!(i18n.t("title", None)?, "Home");
    assert_eq!(store.cached_locales(), vec!["en"]);

    Ok(())
}

#[test]
fn test_missing_locale_file_is_a_load_failure() -> Result<()> {
    let dir = site(&[("en", r#"{"title": "Home"}"#)])?;
    let mut store = TranslationStore::new(FsSource::new(dir.path()), CachePolicy::Retain);

    let err = Translator::new(ssg(None, Some(HostContext::with_lang("xx"))), &mut store)
        .unwrap_err();

    assert!(matches!(err, I18nError::Load { ref locale, .. } if locale == "xx"));

    Ok(())
}

#[test]
fn test_host_hint_cannot_leave_messages_root() -> Result<()> {
    let dir = site(&[("secret", r#"{"token": "hunter2"}"#)])?;
    let root = dir.path().join("i18n");
    fs::create_dir_all(&root)?;
    fs::write(root.join("en.json"), r#"{"title": "Home"}"#)?;
    let mut store = TranslationStore::new(FsSource::new(&root), CachePolicy::Retain);

    for hint in ["../secret", "../i18n/en", ".."] {
        let err = Translator::new(ssg(None, Some(HostContext::with_lang(hint))), &mut store)
            .unwrap_err();
        assert!(
            matches!(
                err,
                I18nError::Load {
                    source: LoadError::InvalidLocale { .. },
                    ..
                }
            ),
            "{hint}: {err:?}"
        );
    }
    assert!(store.cached_locales().is_empty());

    Ok(())
}

#[test]
fn test_refresh_policy_picks_up_edits() -> Result<()> {
    let dir = site(&[("en", r#"{"title": "Draft"}"#)])?;
    let mut store = TranslationStore::new(FsSource::new(dir.path()), CachePolicy::Refresh);

    let before = Translator::new(ssg(None, None), &mut store)?;
    fs::write(dir.path().join("en.json"), r#"{"title": "Final"}"#)?;
    let after = Translator::new(ssg(None, None), &mut store)?;

    assert_eq!(before.t("title", None)?, "Draft");
    assert_eq!(after.t("title", None)?, "Final");

    Ok(())
}

#[test]
fn test_descriptor_from_json() -> Result<()> {
    let dir = site(&[("fr", r#"{"nav": {"home": "Accueil"}}"#)])?;
    let mut store = TranslationStore::new(FsSource::new(dir.path()), CachePolicy::Retain);

    let options: I18nOptions =
        serde_json::from_str(r#"{"ssg": {"astro": {"currentLocale": "fr"}}}"#)?;
    let i18n = Translator::new(options, &mut store)?;

    assert_eq!(i18n.t("nav.home", None)?, "Accueil");
    let err = i18n.t("nav.missing", None).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Missing translation key: "nav.missing" for locale: "fr"."#
    );

    Ok(())
}
