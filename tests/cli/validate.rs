use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_all_locales_in_sync() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": {"b": "x"}, "c": "y"}"#),
        ("pt", r#"{"a": {"b": "z"}, "c": "w"}"#),
    ])?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 locale files - all in sync with "en"

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_missing_key() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": {"b": "x"}, "c": "y"}"#),
        ("es", r#"{"a": {"b": "z"}}"#),
    ])?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Locale: [es]
      ✘ missing key: c

    ✘ 1 of 1 locale out of sync with base locale "en"
    "#);
    Ok(())
}

#[test]
fn test_missing_and_extra_keys_across_locales() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"nav": {"home": "Home", "about": "About"}, "tags": ["a"]}"#),
        ("de", r#"{"nav": {"home": "Start", "about": "Über"}, "tags": ["b", "c"]}"#),
        ("fr", r#"{"nav": {"home": "Accueil", "blog": "Blog"}, "tags": "x"}"#),
    ])?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Locale: [fr]
      ✘ missing key: nav.about
      ⚠ extra key (not in base): nav.blog

    ✘ 1 of 2 locales out of sync with base locale "en"
    "#);
    Ok(())
}

#[test]
fn test_base_flag() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": "x", "b": "y"}"#),
        ("pt", r#"{"a": "x"}"#),
    ])?;

    let mut cmd = test.command();
    cmd.args(["--base", "pt"]);
    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Locale: [en]
      ⚠ extra key (not in base): b

    ✘ 1 of 1 locale out of sync with base locale "pt"
    "#);
    Ok(())
}

#[test]
fn test_invalid_base_flag() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "x"}"#)])?;

    let mut cmd = test.command();
    cmd.args(["--base", "../en"]);
    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid value for '--base': locale "../en" is not a valid file name
    "#);
    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".glossarc.json",
        r#"{"messagesRoot": "./locales", "baseLocale": "fr"}"#,
    )?;
    test.write_file("locales/fr.json", r#"{"title": "Titre"}"#)?;
    test.write_file("locales/en.json", r#"{"title": "Title"}"#)?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 locale files - all in sync with "fr"

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_messages_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("content/en.json", r#"{"title": "Title"}"#)?;

    let mut cmd = test.command();
    cmd.args(["--messages-root", "content"]);
    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 locale file - all in sync with "en"

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_missing_directory() -> Result<()> {
    let test = CliTest::new()?;
    let _guard = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Messages directory '[PROJECT]/./i18n' does not exist.
    Hint: Check your .glossarc.json 'messagesRoot' setting.
    ");
    Ok(())
}

#[test]
fn test_missing_base_file() -> Result<()> {
    let test = CliTest::with_locales(&[("fr", "{}")])?;
    let _guard = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Base locale file 'en.json' not found in '[PROJECT]/./i18n'.
    ");
    Ok(())
}

#[test]
fn test_malformed_locale_file() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "x"}"#), ("zh", "{ invalid json }")])?;
    let _guard = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to parse translation file: [PROJECT]/./i18n/zh.json: key must be a string at line 1 column 3
    ");
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("--base <LOCALE>"));
    assert!(stdout.contains("--messages-root <DIR>"));
    Ok(())
}
