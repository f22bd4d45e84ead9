//! Message key normalization.

use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]+").unwrap());

/// Converts an arbitrary phrase into a lowerCamelCase message key.
///
/// Runs of `-` and `_` become a single space, every word is title-cased,
/// non-alphanumeric characters are dropped and the first remaining
/// character is lower-cased. Digits are kept as-is.
///
/// # Examples
///
/// ```
/// use lokit::core::key::lower_camel_case;
///
/// assert_eq!(lower_camel_case("Hello World"), "helloWorld");
/// assert_eq!(lower_camel_case("foo-bar_baz"), "fooBarBaz");
/// assert_eq!(lower_camel_case("123 go"), "123Go");
/// assert_eq!(lower_camel_case("!!!"), "");
/// ```
pub fn lower_camel_case(text: &str) -> String {
    let spaced = SEPARATOR_RUN_REGEX.replace_all(text, " ");
    let titled = title_case(&spaced);

    let mut key = String::with_capacity(titled.len());
    for c in titled.chars().filter(|c| c.is_alphanumeric()) {
        if key.is_empty() {
            key.extend(c.to_lowercase());
        } else {
            key.push(c);
        }
    }
    key
}

/// Title-cases `text`: a cased character that follows another cased
/// character is lower-cased, every other cased character is upper-cased.
/// Uncased characters (spaces, digits, punctuation) start a new word.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_cased = false;

    for c in text.chars() {
        if is_cased(c) {
            if previous_is_cased {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_cased = true;
        } else {
            result.push(c);
            previous_is_cased = false;
        }
    }
    result
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}
