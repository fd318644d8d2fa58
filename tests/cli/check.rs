use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, output_text};

#[test]
fn test_check_reports_unused_keys() -> Result<()> {
    let test = CliTest::with_messages(r#"{"a": {"b": "x"}, "c": "y"}"#)?;
    test.write_file("src/app.tsx", "export const label = t('c');")?;

    let output = test.check_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Progress: 2/2"));
    assert!(stdout.contains("Checked 2 translation keys against 1 source file"));
    assert!(stdout.contains("1 unused key in"));
    assert!(stdout.contains("  a.b\n"));
    assert!(!stdout.contains("  c\n"));

    Ok(())
}

#[test]
fn test_check_clean_project_succeeds() -> Result<()> {
    let test = CliTest::with_messages(r#"{"home": {"title": "x"}}"#)?;
    test.write_file("src/page.tsx", r#"<h1>{t("home.title")}</h1>"#)?;

    let output = test.check_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("No unused translation keys found"));

    Ok(())
}

#[test]
fn test_check_namespaced_and_indexed_keys() -> Result<()> {
    let test = CliTest::with_messages(
        r#"{
            "settings": {"save": "Save"},
            "steps": {"items": {"0": {"title": "One"}, "1": {"title": "Two"}}}
        }"#,
    )?;
    test.write_file(
        "src/settings.tsx",
        r#"const t = useTranslations('settings');
export const Save = () => <button>{t('save')}</button>;"#,
    )?;
    test.write_file(
        "src/steps.tsx",
        r#"export const Steps = () => [0, 1].map((i) => t(`steps.items.${i}.title`));
const first = t('steps.items.0.title');"#,
    )?;

    let output = test.check_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0), "stdout:\n{}", stdout);

    Ok(())
}

#[test]
fn test_check_ignores_messages_directory() -> Result<()> {
    let test = CliTest::with_messages(r#"{"orphan": "x"}"#)?;
    // A source file next to the translations is not evidence.
    test.write_file("src/locales/index.ts", "t('orphan');")?;
    test.write_file("src/app.tsx", "export {};")?;

    let output = test.check_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("  orphan\n"));

    Ok(())
}

#[test]
fn test_check_verbose_shows_evidence() -> Result<()> {
    let test = CliTest::with_messages(r#"{"c": "y"}"#)?;
    test.write_file("src/app.tsx", "t('c');")?;

    let output = test.check_command().arg("-v").output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("used: c (full key)"));

    Ok(())
}

#[test]
fn test_check_command_line_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/en.json", r#"{"greeting": "hi", "farewell": "bye"}"#)?;
    test.write_file("web/app.js", "t('greeting')")?;

    let output = test
        .check_command()
        .args(["--messages-file", "i18n/en.json", "--source-root", "web"])
        .output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("  farewell\n"));
    assert!(!stdout.contains("  greeting\n"));

    Ok(())
}

#[test]
fn test_check_reads_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nsweeprc.json",
        r#"{"messagesFile": "lang/fr.json", "sourceRoots": ["app"], "translationFunction": "i18n.t"}"#,
    )?;
    test.write_file("lang/fr.json", r#"{"ok": "oui", "ko": "non"}"#)?;
    test.write_file("app/main.ts", "i18n.t('ok');")?;

    let output = test.check_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("  ko\n"));
    assert!(!stdout.contains("  ok\n"));

    Ok(())
}

#[test]
fn test_check_config_ignores_are_project_relative() -> Result<()> {
    let test = CliTest::with_messages(r#"{"title": "x", "label": "y"}"#)?;
    test.write_file(
        ".i18nsweeprc.json",
        r#"{"ignores": ["src/generated/**", "src/legacy"]}"#,
    )?;
    test.write_file("src/generated/keys.ts", "t('title');")?;
    test.write_file("src/legacy/old.ts", "t('label');")?;
    test.write_file("src/app.tsx", "export {};")?;

    let output = test.check_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("against 1 source file"));
    assert!(stdout.contains("  title\n"));
    assert!(stdout.contains("  label\n"));

    Ok(())
}

#[test]
fn test_check_missing_messages_file_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.starts_with("Error:"));

    Ok(())
}

#[test]
fn test_check_non_object_messages_is_error() -> Result<()> {
    let test = CliTest::with_messages("[1, 2]")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}
