//! Loading and storing locale message files.
//!
//! A message file holds a flat JSON object of `key -> {"message": ...}`
//! entries. Files are always written in one canonical form: keys sorted at
//! every level, 4-space indentation, non-ASCII text kept literal and a
//! trailing newline.

use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Serializer, Value, ser::PrettyFormatter};

/// The in-memory content of one locale file.
pub type Messages = Map<String, Value>;

const INDENT: &[u8] = b"    ";

/// A message file that could not be decoded and was treated as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLoadWarning {
    pub file_path: String,
    pub error: String,
}

impl fmt::Display for MessageLoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error decoding JSON in file: {} ({})",
            self.file_path, self.error
        )
    }
}

#[derive(Debug, Default)]
pub struct LoadedMessages {
    pub messages: Messages,
    pub warning: Option<MessageLoadWarning>,
}

/// Load the JSON object stored at `path`.
///
/// Content that is not a JSON object yields an empty object together with
/// a [`MessageLoadWarning`]. Read failures are returned as errors.
pub fn load_messages(path: &Path) -> Result<LoadedMessages> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let error = match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(messages)) => {
            return Ok(LoadedMessages {
                messages,
                warning: None,
            });
        }
        Ok(_) => "root of JSON file must be an object".to_string(),
        Err(e) => e.to_string(),
    };

    Ok(LoadedMessages {
        messages: Messages::new(),
        warning: Some(MessageLoadWarning {
            file_path: path.display().to_string(),
            error,
        }),
    })
}

/// Overwrite `path` with the canonical serialization of `messages`.
///
/// Missing parent directories are created.
pub fn store_messages(messages: &Messages, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = to_canonical_json(messages)?;
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Serialize `messages` with sorted keys and 4-space indentation.
pub fn to_canonical_json(messages: &Messages) -> Result<String> {
    let sorted = sort_keys(&Value::Object(messages.clone()));

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    sorted
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;

    let mut content = String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")?;
    content.push('\n');
    Ok(content)
}

/// Rebuild `value` with object keys in lexicographic order at every level.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}
