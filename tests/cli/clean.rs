use std::{
    io::Write,
    process::{Output, Stdio},
};

use anyhow::{Context, Result};
use pretty_assertions::assert_eq;

use crate::{CliTest, MESSAGES_FILE, output_text};

const MESSAGES: &str = r#"{
  "home": {
    "title": "Welcome",
    "old": {
      "banner": "Gone"
    }
  },
  "legacy": {
    "notice": "Unused"
  },
  "footer": "Footer"
}"#;

const BACKUP_FILE: &str = "src/locales/zh.json.bak";

fn setup() -> Result<CliTest> {
    let test = CliTest::with_messages(MESSAGES)?;
    test.write_file(
        "src/app.tsx",
        r#"export const App = () => (
  <main>
    <h1>{t('home.title')}</h1>
    <footer>{t("footer")}</footer>
  </main>
);"#,
    )?;
    Ok(test)
}

fn run_with_input(test: &CliTest, input: &str) -> Result<Output> {
    let mut child = test
        .clean_command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .context("stdin should be piped")?
        .write_all(input.as_bytes())?;
    Ok(child.wait_with_output()?)
}

const PRUNED: &str = "{\n  \"home\": {\n    \"title\": \"Welcome\"\n  },\n  \"footer\": \"Footer\"\n}\n";

#[test]
fn test_clean_dry_run_keeps_file() -> Result<()> {
    let test = setup()?;

    let output = test.clean_command().arg("--dry-run").output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("2 unused keys in"));
    assert!(stdout.contains("  home.old.banner\n"));
    assert!(stdout.contains("  legacy.notice\n"));
    assert!(stdout.contains("Dry run: no keys were deleted"));
    assert_eq!(test.read_file(MESSAGES_FILE)?, MESSAGES);
    assert!(!test.root().join(BACKUP_FILE).exists());

    Ok(())
}

#[test]
fn test_clean_yes_deletes_and_prunes() -> Result<()> {
    let test = setup()?;

    let output = test.clean_command().arg("--yes").output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Backup written to"));
    assert!(stdout.contains("Deleted 2 keys from"));
    assert_eq!(test.read_file(MESSAGES_FILE)?, PRUNED);
    assert_eq!(test.read_file(BACKUP_FILE)?, MESSAGES);

    Ok(())
}

#[test]
fn test_clean_no_backup() -> Result<()> {
    let test = setup()?;

    let output = test.clean_command().args(["-y", "--no-backup"]).output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout.contains("Backup written to"));
    assert_eq!(test.read_file(MESSAGES_FILE)?, PRUNED);
    assert!(!test.root().join(BACKUP_FILE).exists());

    Ok(())
}

#[test]
fn test_clean_prompt_accepted() -> Result<()> {
    let test = setup()?;

    let output = run_with_input(&test, "y\n")?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("(y/n)"));
    assert_eq!(test.read_file(MESSAGES_FILE)?, PRUNED);

    Ok(())
}

#[test]
fn test_clean_prompt_declined() -> Result<()> {
    let test = setup()?;

    let output = run_with_input(&test, "n\n")?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("No changes made"));
    assert_eq!(test.read_file(MESSAGES_FILE)?, MESSAGES);
    assert!(!test.root().join(BACKUP_FILE).exists());

    Ok(())
}

#[test]
fn test_clean_without_input_changes_nothing() -> Result<()> {
    let test = setup()?;

    let output = test.clean_command().stdin(Stdio::null()).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file(MESSAGES_FILE)?, MESSAGES);

    Ok(())
}

#[test]
fn test_clean_nothing_to_delete() -> Result<()> {
    let test = CliTest::with_messages(r#"{"footer": "Footer"}"#)?;
    test.write_file("src/app.tsx", "t('footer')")?;

    let output = test.clean_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout.contains("(y/n)"));
    assert!(stdout.contains("No unused translation keys found"));
    assert!(!test.root().join(BACKUP_FILE).exists());

    Ok(())
}
