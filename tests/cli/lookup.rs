use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, fixture_path, run};

const DE_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de_DE">
<context>
    <name>CloseButton</name>
    <message>
        <source>Close Tab</source>
        <translation>Tab schließen</translation>
    </message>
    <message>
        <source>Close Window</source>
        <translation>Fenster schließen</translation>
    </message>
</context>
<context>
    <name>UIDownloader</name>
    <message numerus="yes">
        <source>%n file(s) downloaded</source>
        <translation>
            <numerusform>%n Datei heruntergeladen</numerusform>
            <numerusform>%n Dateien heruntergeladen</numerusform>
        </translation>
    </message>
    <message>
        <source>Downloading...</source>
        <translation type="unfinished">Wird heruntergeladen...</translation>
    </message>
</context>
</TS>
"#;

fn lookup(test: &CliTest, file: &str, context: &str, source: &str) -> std::process::Command {
    let mut cmd = test.command();
    cmd.args(["lookup", file, "--context", context, "--source", source]);
    cmd
}

#[test]
fn test_lookup_fixture() -> Result<()> {
    let test = CliTest::new()?;
    let fixture = fixture_path();

    let cmd = lookup(
        &test,
        fixture.to_str().unwrap(),
        "CloseButton",
        "Close Tab",
    );
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_snapshot!(stdout.trim_end(), @"ჩანართის დახურვა");

    Ok(())
}

#[test]
fn test_lookup_missing_prints_source() -> Result<()> {
    let test = CliTest::with_file("qt_de.ts", DE_CATALOG)?;

    let (code, stdout, stderr) = run(lookup(&test, "qt_de.ts", "CloseButton", "Close All"))?;

    assert_eq!(code, 1);
    assert_eq!(stdout, "Close All\n");
    assert!(stderr.contains("no translation found"));

    Ok(())
}

#[test]
fn test_lookup_numerus() -> Result<()> {
    let test = CliTest::with_file("qt_de.ts", DE_CATALOG)?;

    let mut cmd = lookup(&test, "qt_de.ts", "UIDownloader", "%n file(s) downloaded");
    cmd.args(["-n", "1"]);
    let (_, stdout, _) = run(cmd)?;
    assert_eq!(stdout, "1 Datei heruntergeladen\n");

    let mut cmd = lookup(&test, "qt_de.ts", "UIDownloader", "%n file(s) downloaded");
    cmd.args(["-n", "5"]);
    let (_, stdout, _) = run(cmd)?;
    assert_eq!(stdout, "5 Dateien heruntergeladen\n");

    Ok(())
}

#[test]
fn test_lookup_unfinished() -> Result<()> {
    let test = CliTest::with_file("qt_de.ts", DE_CATALOG)?;

    let (code, stdout, _) = run(lookup(&test, "qt_de.ts", "UIDownloader", "Downloading..."))?;
    assert_eq!(code, 1);
    assert_eq!(stdout, "Downloading...\n");

    let mut cmd = lookup(&test, "qt_de.ts", "UIDownloader", "Downloading...");
    cmd.arg("--include-unfinished");
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "Wird heruntergeladen...\n");

    Ok(())
}

#[test]
fn test_lookup_fallback_chain() -> Result<()> {
    let test = CliTest::with_file("qt_de.ts", DE_CATALOG)?;
    let fixture = fixture_path();

    // The Georgian catalog has no "Close Window"; the German one does.
    let mut cmd = lookup(
        &test,
        fixture.to_str().unwrap(),
        "CloseButton",
        "Close Window",
    );
    cmd.args(["--fallback", "qt_de.ts"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "Fenster schließen\n");

    Ok(())
}

#[test]
fn test_lookup_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(lookup(&test, "nope.ts", "CloseButton", "Close Tab"))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to load catalog nope.ts"));

    Ok(())
}
