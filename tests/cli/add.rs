use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stdout};

#[test]
fn test_add_writes_key_to_every_locale() -> Result<()> {
    let test = CliTest::with_locales(&["en", "de"])?;
    test.write_locale("en", r#"{"close": {"message": "Close"}}"#)?;
    test.write_locale("de", r#"{"close": {"message": "Schließen"}}"#)?;

    let output = test.run(&["-add"], "Hello World\n")?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Enter your message: \u{2713} Added \"helloWorld\" to 2 of 2 locale files\n"
    );
    assert_eq!(
        test.read_locale("de")?,
        r#"{
    "close": {
        "message": "Schließen"
    },
    "helloWorld": {
        "message": "Hello World"
    }
}
"#
    );
    Ok(())
}

#[test]
fn test_add_keeps_existing_translation() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_locale("en", "{}")?;
    test.write_locale("fr", r#"{"fooBar": {"message": "X"}}"#)?;

    let output = test.run(&["-add"], "foo bar\n")?;

    assert!(output.status.success());
    assert_eq!(test.read_locale_json("fr")?, json!({"fooBar": {"message": "X"}}));
    assert_eq!(
        test.read_locale_json("en")?,
        json!({"fooBar": {"message": "foo bar"}})
    );
    Ok(())
}

#[test]
fn test_add_recovers_from_malformed_file() -> Result<()> {
    let test = CliTest::with_locales(&["en", "it"])?;
    test.write_locale("en", "{}")?;
    test.write_locale("it", r#"{"ciao": "#)?;

    let output = test.run(&["-add"], "Thanks!\n")?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(
        out.contains("warning: Error decoding JSON in file: "),
        "unexpected output: {}",
        out
    );
    assert!(out.contains("_locales/it/messages.json"));
    assert!(out.contains("Added \"thanks\" to 2 of 2 locale files"));
    assert_eq!(
        test.read_locale_json("it")?,
        json!({"thanks": {"message": "Thanks!"}})
    );
    Ok(())
}

#[test]
fn test_add_without_input_fails() -> Result<()> {
    let test = CliTest::with_locales(&["en"])?;
    test.write_locale("en", r#"{"b":{"message":"B"}}"#)?;

    let output = test.run(&["-add"], "")?;

    assert_eq!(output.status.code(), Some(2));
    assert!(crate::stderr(&output).starts_with("Error: "));
    // Nothing was rewritten.
    assert_eq!(test.read_locale("en")?, r#"{"b":{"message":"B"}}"#);
    Ok(())
}
