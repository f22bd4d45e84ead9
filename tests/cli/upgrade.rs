use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stdout};

#[test]
fn test_upgrade_fills_gaps_without_overwriting() -> Result<()> {
    let test = CliTest::with_locales(&["en", "de", "pt_BR"])?;
    test.write_locale(
        "en",
        r#"{"a": {"message": "D"}, "b": {"message": "Bee"}}"#,
    )?;
    test.write_locale("de", r#"{"a": {"message": "L"}}"#)?;

    let output = test.run(&["-upgrade"], "")?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\u{2713} Upgraded 3 locales (1 created, 1 keys added)\n"
    );
    assert_eq!(
        test.read_locale_json("de")?,
        json!({"a": {"message": "L"}, "b": {"message": "Bee"}})
    );
    assert_eq!(
        test.read_locale_json("pt_BR")?,
        json!({"a": {"message": "D"}, "b": {"message": "Bee"}})
    );
    Ok(())
}

#[test]
fn test_upgrade_default_locale_list() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--locales-root", "_locales", "-upgrade"], "")?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Upgraded 53 locales (53 created, 0 keys added)"));
    let created = fs::read_dir(test.root().join("_locales"))?.count();
    assert_eq!(created, 53);
    assert_eq!(test.read_locale("zh_TW")?, "{}\n");
    Ok(())
}

#[test]
fn test_upgrade_with_default_locale_override() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_locale("fr", r#"{"bonjour": {"message": "Bonjour"}}"#)?;

    let output = test.run(&["--default-locale", "fr", "-upgrade"], "")?;

    assert!(output.status.success());
    assert_eq!(
        test.read_locale_json("en")?,
        json!({"bonjour": {"message": "Bonjour"}})
    );
    Ok(())
}
