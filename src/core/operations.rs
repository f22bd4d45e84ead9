//! Edits applied uniformly to every file of a locale set.
//!
//! Each operation reloads every file from disk, edits the object in memory
//! and stores it back, whether or not the edit changed anything.

use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use super::key::lower_camel_case;
use super::messages::{
    LoadedMessages, MessageLoadWarning, Messages, load_messages, store_messages,
};

/// Outcome of running an operation over a locale set.
#[derive(Debug, Default)]
pub struct OperationReport {
    /// Every file that was rewritten, in processing order.
    pub files_written: Vec<PathBuf>,
    /// Number of files whose content was actually edited.
    pub files_changed: usize,
    /// Files that could not be decoded and were treated as empty.
    pub warnings: Vec<MessageLoadWarning>,
}

/// Result of [`add_item`], carrying the key derived from the message.
#[derive(Debug)]
pub struct AddedItem {
    pub key: String,
    pub report: OperationReport,
}

/// Add `message` under its lowerCamelCase key to every file lacking it.
///
/// The stored value is `{"message": <message>}` with the original,
/// un-normalized text. Existing entries are never overwritten.
pub fn add_item(files: &[PathBuf], message: &str) -> Result<AddedItem> {
    let key = lower_camel_case(message);
    let report = rewrite_each(files, |messages| {
        if messages.contains_key(&key) {
            return false;
        }
        messages.insert(key.clone(), json!({ "message": message }));
        true
    })?;
    Ok(AddedItem { key, report })
}

/// Remove `key` from every file. The key is used verbatim.
pub fn remove_item(files: &[PathBuf], key: &str) -> Result<OperationReport> {
    rewrite_each(files, |messages| messages.shift_remove(key).is_some())
}

/// Move the value stored under `old_key` to `new_key` in every file.
///
/// An entry already present under `new_key` is replaced.
pub fn change_key(files: &[PathBuf], old_key: &str, new_key: &str) -> Result<OperationReport> {
    rewrite_each(files, |messages| match messages.shift_remove(old_key) {
        Some(value) => {
            messages.insert(new_key.to_string(), value);
            true
        }
        None => false,
    })
}

/// Load and store every file, normalizing its formatting and decoding
/// escaped unicode sequences.
pub fn decode_characters(files: &[PathBuf]) -> Result<OperationReport> {
    rewrite_each(files, |_| false)
}

fn rewrite_each<F>(files: &[PathBuf], mut edit: F) -> Result<OperationReport>
where
    F: FnMut(&mut Messages) -> bool,
{
    let mut report = OperationReport::default();

    for path in files {
        let LoadedMessages {
            mut messages,
            warning,
        } = load_messages(path)?;
        report.warnings.extend(warning);

        if edit(&mut messages) {
            report.files_changed += 1;
        }

        store_messages(&messages, path)?;
        report.files_written.push(path.clone());
    }

    Ok(report)
}
