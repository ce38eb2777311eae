use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Created .tscatrc.json\n");

    let content = test.read_file(".tscatrc.json")?;
    assert!(content.ends_with('\n'));
    let config: Value = serde_json::from_str(&content)?;
    assert_eq!(config["catalogsRoot"], ".");
    assert_eq!(config["ignoreContexts"], Value::Array(Vec::new()));
    assert_eq!(config["includeUnfinished"], false);

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stderr.contains(".tscatrc.json already exists"));
    assert_eq!(test.read_file(".tscatrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_picked_up_by_check() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, _, _) = run(cmd)?;
    assert_eq!(code, 0);

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("7 problems"));

    Ok(())
}
