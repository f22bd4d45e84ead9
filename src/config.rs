use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::LocaleLayout;

pub const CONFIG_FILE_NAME: &str = ".lokitrc.json";

/// Locales created and filled by `-upgrade` when no list is configured.
pub const DEFAULT_LOCALES: &[&str] = &[
    "am", "ar", "bg", "bn", "ca", "cs", "da", "de", "el", "en", "es", "et", "fa", "fi", "fil",
    "fr", "gu", "he", "hi", "hin", "hr", "hu", "id", "it", "ja", "kn", "ko", "lt", "lv", "ml",
    "mr", "ms", "nb_NO", "nl", "no", "pl", "pt_BR", "pt_PT", "ro", "ru", "sk", "sl", "sr", "sv",
    "sw", "ta", "te", "th", "tr", "uk", "vi", "zh_CN", "zh_TW",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    #[serde(default = "default_default_locale")]
    pub default_locale: String,
    #[serde(default = "default_messages_file")]
    pub messages_file: String,
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
}

fn default_locales_root() -> String {
    "../_locales".to_string()
}

fn default_default_locale() -> String {
    "en".to_string()
}

fn default_messages_file() -> String {
    "messages.json".to_string()
}

fn default_locales() -> Vec<String> {
    DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            default_locale: default_default_locale(),
            messages_file: default_messages_file(),
            locales: default_locales(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Locale identifiers and the message file name must be single path
    /// components so every locale file stays inside the locale root.
    pub fn validate(&self) -> Result<()> {
        if !is_path_component(&self.messages_file) {
            bail!(
                "Invalid 'messagesFile': \"{}\" must be a plain file name",
                self.messages_file
            );
        }

        if !is_path_component(&self.default_locale) {
            bail!(
                "Invalid 'defaultLocale': \"{}\" must be a plain locale identifier",
                self.default_locale
            );
        }

        for locale in &self.locales {
            if !is_path_component(locale) {
                bail!(
                    "Invalid locale in 'locales': \"{}\" must be a plain locale identifier",
                    locale
                );
            }
        }

        Ok(())
    }

    /// The locale layout described by this configuration.
    ///
    /// A relative `localesRoot` is resolved against `base_dir`.
    pub fn layout(&self, base_dir: &Path) -> LocaleLayout {
        LocaleLayout {
            root: base_dir.join(&self.locales_root),
            default_locale: self.default_locale.clone(),
            messages_file: self.messages_file.clone(),
            locales: self.locales.clone(),
        }
    }
}

fn is_path_component(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory that relative paths in the config are resolved against.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
