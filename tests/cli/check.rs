use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const SMALL_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ka_GE">
<context>
    <name>QFileDialog</name>
    <message>
        <source>Back</source>
        <translation>უკან</translation>
    </message>
    <message>
        <source>Forward</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_fixture_default_rules() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"Proxy host not found\"  place-marker"));
    assert!(stdout.contains("--> ./nls/qt_ka.ts:6160:5"));
    assert!(stdout.contains("= note: (\""));
    assert!(stdout.contains("unexpected %1"));
    assert!(stdout.contains("warning: \"Print to File (PDF)\"  punctuation"));
    assert!(stdout.contains("warning: \"P&roperties\"  accelerator"));
    assert!(stdout.contains("7 problems (1 error, 6 warnings)"));
    assert!(!stdout.contains("unfinished"));

    Ok(())
}

#[test]
fn test_issues_sorted_by_line() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let (_, stdout, _) = run(test.check_command())?;

    let lines: Vec<usize> = stdout
        .lines()
        .filter_map(|l| l.trim().strip_prefix("--> ./nls/qt_ka.ts:"))
        .filter_map(|rest| rest.split(':').next())
        .map(|line| line.parse().unwrap())
        .collect();
    assert_eq!(lines, vec![261, 3690, 3808, 3895, 4091, 5195, 6160]);

    Ok(())
}

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", SMALL_CATALOG)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "\u{2713} Checked 1 catalog - no issues found\n");

    Ok(())
}

#[test]
fn test_unfinished_is_opt_in() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", SMALL_CATALOG)?;

    let mut cmd = test.check_command();
    cmd.arg("unfinished");
    let (code, stdout, _) = run(cmd)?;

    // Warnings only.
    assert_eq!(code, 0);
    assert!(stdout.contains("warning: \"Forward\"  unfinished"));
    assert!(stdout.contains("--> ./nls/qt_ka.ts:10:5"));
    assert!(stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_selected_rule_only() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let mut cmd = test.check_command();
    cmd.arg("punctuation");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Print to File (PDF)"));
    assert!(stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_config_ignore_contexts() -> Result<()> {
    let test = CliTest::with_fixture()?;
    test.write_file(
        ".tscatrc.json",
        r#"{ "ignoreContexts": ["QSocks5SocketEngine"] }"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(!stdout.contains("Proxy host not found"));
    assert!(stdout.contains("6 problems (0 errors, 6 warnings)"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_fixture()?;
    test.write_file(".tscatrc.json", r#"{ "ignores": ["nls/**"] }"#)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "\u{2713} Checked 0 catalogs - no issues found\n");

    Ok(())
}

#[test]
fn test_language_filter() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let mut cmd = test.check_command();
    cmd.args(["--language", "de"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 0 catalogs"));

    Ok(())
}

#[test]
fn test_schema_and_parse_errors() -> Result<()> {
    let test = CliTest::with_file(
        "nls/qt_ka.ts",
        r#"<TS version="2.1" language="ka_GE">
<context>
    <message>
        <source>Back</source>
        <translation>უკან</translation>
    </message>
</context>
</TS>
"#,
    )?;
    test.write_file(
        "nls/qt_de.ts",
        "<TS version=\"2.1\" language=\"de\">\n<context>\n<name>C</name>\n</TS>\n",
    )?;

    let (code, stdout, stderr) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("<context> without <name>"));
    assert!(stdout.contains("schema"));
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("--> ./nls/qt_de.ts\n"));
    assert!(stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_fixture()?;
    test.write_file(".tscatrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let (code, _, stderr) = run(test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("ignores"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    for command in ["check", "lookup", "stats", "clean", "init", "serve"] {
        assert!(stdout.contains(command), "help should list {}", command);
    }

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Usage:"));

    Ok(())
}
