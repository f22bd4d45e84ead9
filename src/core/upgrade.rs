//! Upgrade routine: make every configured locale a key-superset of the
//! default locale.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::messages::{
    LoadedMessages, MessageLoadWarning, Messages, load_messages, store_messages,
};

/// Where locale files live and which locales are expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleLayout {
    pub root: PathBuf,
    pub default_locale: String,
    pub messages_file: String,
    pub locales: Vec<String>,
}

impl LocaleLayout {
    pub fn locale_dir(&self, locale: &str) -> PathBuf {
        self.root.join(locale)
    }

    pub fn locale_file(&self, locale: &str) -> PathBuf {
        self.locale_dir(locale).join(&self.messages_file)
    }

    pub fn default_file(&self) -> PathBuf {
        self.locale_file(&self.default_locale)
    }
}

#[derive(Debug, Default)]
pub struct UpgradeReport {
    /// Locale files written from scratch as a copy of the default locale.
    pub created: Vec<PathBuf>,
    /// Existing locale files that were merged and rewritten.
    pub merged: Vec<PathBuf>,
    /// Total number of default keys filled into existing files.
    pub keys_added: usize,
    pub warnings: Vec<MessageLoadWarning>,
}

impl UpgradeReport {
    pub fn locales_processed(&self) -> usize {
        self.created.len() + self.merged.len()
    }
}

/// Fill every configured locale with the keys of the default locale.
///
/// Missing locale directories and files are created. Values already present
/// in a locale are never replaced.
pub fn upgrade(layout: &LocaleLayout) -> Result<UpgradeReport> {
    let mut report = UpgradeReport::default();

    let default_file = layout.default_file();
    let defaults = if default_file.exists() {
        let LoadedMessages { messages, warning } = load_messages(&default_file)?;
        report.warnings.extend(warning);
        messages
    } else {
        Messages::new()
    };

    for locale in &layout.locales {
        let dir = layout.locale_dir(locale);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let path = layout.locale_file(locale);
        if path.exists() {
            report.keys_added += merge_defaults(&path, &defaults, &mut report.warnings)?;
            report.merged.push(path);
        } else {
            store_messages(&defaults, &path)?;
            report.created.push(path);
        }
    }

    Ok(report)
}

/// Add every default key missing from the file at `path`, returning how
/// many keys were added.
fn merge_defaults(
    path: &Path,
    defaults: &Messages,
    warnings: &mut Vec<MessageLoadWarning>,
) -> Result<usize> {
    let LoadedMessages {
        mut messages,
        warning,
    } = load_messages(path)?;
    warnings.extend(warning);

    let mut added = 0;
    for (key, value) in defaults {
        if !messages.contains_key(key) {
            messages.insert(key.clone(), value.clone());
            added += 1;
        }
    }

    store_messages(&messages, path)?;
    Ok(added)
}
