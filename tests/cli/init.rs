use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .presetpackrc.json"));

    let config: Value = serde_json::from_str(&test.read_file(".presetpackrc.json")?)?;
    assert_eq!(config["locale"], "en");
    assert_eq!(config["fieldSchema"], "schema/field.json");
    assert_eq!(config["taginfo"]["name"], "Editor Presets");

    Ok(())
}

#[test]
fn test_init_existing_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".presetpackrc.json", r#"{ "locale": "de" }"#)?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".presetpackrc.json already exists"));
    assert_eq!(test.read_file(".presetpackrc.json")?, r#"{ "locale": "de" }"#);

    Ok(())
}
