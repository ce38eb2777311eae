use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_stats_fixture() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let mut cmd = test.command();
    cmd.arg("stats");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Catalog         Language  Contexts  Messages  Finished  Unfinished  Vanished   Done",
            "./nls/qt_ka.ts     ka_GE       123      1775      1381         394         0  77.8%",
        ]
    );

    Ok(())
}

#[test]
fn test_stats_no_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("stats");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "No catalogs found\n");

    Ok(())
}

#[test]
fn test_stats_language_from_file_name() -> Result<()> {
    let test = CliTest::with_file(
        "translations/VirtualBox_de.ts",
        r#"<TS version="2.1">
<context>
    <name>QFileDialog</name>
    <message>
        <source>Back</source>
        <translation>Zurück</translation>
    </message>
    <message>
        <source>Forward</source>
        <translation type="vanished">Vorwärts</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let mut cmd = test.command();
    cmd.args(["stats", "--language", "de"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("./translations/VirtualBox_de.ts"));
    assert!(stdout.contains(" de "));
    assert!(stdout.ends_with("100.0%\n"));

    Ok(())
}
