use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (stdout, _, code) = run(test.command().arg("init"))?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Created .tymaprc.json"));

    let content = test.read_file(".tymaprc.json")?;
    let value: Value = serde_json::from_str(&content)?;
    assert_eq!(value["ignoreTestFiles"], Value::Bool(true));
    assert_eq!(value["embeddedFields"], Value::Bool(true));
    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tymaprc.json", "{}")?;

    let (_, stderr, code) = run(test.command().arg("init"))?;

    assert_eq!(code, Some(2));
    assert!(stderr.contains("already exists"));
    Ok(())
}
