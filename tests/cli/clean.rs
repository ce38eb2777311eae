use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const RETIRED_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ka_GE">
<context>
    <name>QFileDialog</name>
    <message>
        <source>Back</source>
        <translation>უკან</translation>
    </message>
    <message>
        <source>Old Back</source>
        <translation type="vanished">ძველი უკან</translation>
    </message>
</context>
<context>
    <name>QPrintDialog</name>
    <message>
        <source>Print all</source>
        <translation type="obsolete">ყველას ამობეჭდვა</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_clean_dry_run_keeps_file() -> Result<()> {
    let test = CliTest::with_file("qt_ka.ts", RETIRED_CATALOG)?;

    let (code, stdout, _) = run(test.clean_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Would remove 2 entry(ies) in 1 file(s)."));
    assert!(stdout.contains("Run with --apply to remove these entries."));
    assert_eq!(test.read_file("qt_ka.ts")?, RETIRED_CATALOG);

    Ok(())
}

#[test]
fn test_clean_apply_removes_retired_entries() -> Result<()> {
    let test = CliTest::with_file("qt_ka.ts", RETIRED_CATALOG)?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Removed 2 entry(ies) in 1 file(s)."));

    let content = test.read_file("qt_ka.ts")?;
    assert!(content.contains("<source>Back</source>"));
    assert!(!content.contains("Old Back"));
    assert!(!content.contains("QPrintDialog"));

    // Nothing left to clean.
    let (code, stdout, _) = run(test.clean_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("No vanished entries found"));

    Ok(())
}

#[test]
fn test_clean_apply_respects_ignored_contexts() -> Result<()> {
    let test = CliTest::with_file("qt_ka.ts", RETIRED_CATALOG)?;
    test.write_file(".tscatrc.json", r#"{ "ignoreContexts": ["QPrintDialog"] }"#)?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Removed 1 entry(ies) in 1 file(s)."));

    let content = test.read_file("qt_ka.ts")?;
    assert!(!content.contains("Old Back"));
    assert!(content.contains("Print all"));

    Ok(())
}

#[test]
fn test_clean_without_retired_entries() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let (code, stdout, _) = run(test.clean_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("No vanished entries found"));

    Ok(())
}
