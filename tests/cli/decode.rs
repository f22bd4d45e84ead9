use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_decode_unescapes_and_sorts() -> Result<()> {
    let test = CliTest::with_locales(&["ru"])?;
    test.write_locale(
        "ru",
        r#"{"yes": {"message": "\u0414\u0430"}, "no": {"message": "\u041d\u0435\u0442"}}"#,
    )?;

    let output = test.run(&["-decode"], "")?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Re-encoded 1 locale files\n");
    assert_eq!(
        test.read_locale("ru")?,
        r#"{
    "no": {
        "message": "Нет"
    },
    "yes": {
        "message": "Да"
    }
}
"#
    );
    Ok(())
}

#[test]
fn test_decode_twice_is_stable() -> Result<()> {
    let test = CliTest::with_locales(&["en", "el"])?;
    test.write_locale("en", r#"{"b":{"message":"B","description":"x"},"a":{"message":"A"}}"#)?;
    test.write_locale("el", r#"{"a": {"message": "Α"}}"#)?;

    test.run(&["-decode"], "")?;
    let first = (test.read_locale("en")?, test.read_locale("el")?);
    test.run(&["-decode"], "")?;
    let second = (test.read_locale("en")?, test.read_locale("el")?);

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_decode_empties_malformed_file() -> Result<()> {
    let test = CliTest::with_locales(&["en"])?;
    test.write_locale("en", "this is not json")?;

    let output = test.run(&["-decode"], "")?;

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("warning: Error decoding JSON in file: "));
    assert_eq!(test.read_locale("en")?, "{}\n");
    Ok(())
}

#[test]
fn test_decode_walks_nested_files() -> Result<()> {
    let test = CliTest::with_locales(&["en"])?;
    test.write_locale("en", r#"{"a":{"message":"A"}}"#)?;
    test.write_file("_locales/en/extra/more.json", r#"{"b":{"message":"B"}}"#)?;

    let output = test.run(&["--verbose", "-decode"], "")?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("wrote "));
    assert!(out.contains("Re-encoded 2 locale files"));
    assert_eq!(
        test.read_file("_locales/en/extra/more.json")?,
        "{\n    \"b\": {\n        \"message\": \"B\"\n    }\n}\n"
    );
    Ok(())
}
