use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stdout};

#[test]
fn test_no_flags_only_creates_root() -> Result<()> {
    let test = CliTest::with_locales(&["en"])?;

    let output = test.run(&[], "")?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(test.root().join("_locales").is_dir());
    assert!(!test.root().join("_locales/en").exists());
    Ok(())
}

#[test]
fn test_unknown_flags_are_ignored() -> Result<()> {
    let test = CliTest::with_locales(&["en"])?;
    test.write_locale("en", r#"{"a":{"message":"A"}}"#)?;

    let output = test.run(&["-frobnicate", "--whatever", "-decode", "x"], "")?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Re-encoded 1 locale files\n");
    Ok(())
}

#[test]
fn test_flags_run_in_given_order() -> Result<()> {
    let test = CliTest::with_locales(&["en"])?;
    test.write_locale("en", "{}")?;

    // Add then rename then add again: the second add sees the renamed key.
    let output = test.run(
        &["-add", "-change-key", "-add"],
        "Play video\nplayVideo\nplay\nPlay video\n",
    )?;

    assert!(output.status.success());
    assert_eq!(
        test.read_locale_json("en")?,
        json!({
            "play": {"message": "Play video"},
            "playVideo": {"message": "Play video"}
        })
    );
    Ok(())
}
