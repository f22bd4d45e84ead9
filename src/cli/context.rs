use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

use super::args::Arguments;
use crate::config::{CONFIG_FILE_NAME, load_config};
use crate::core::{LocaleLayout, list_files};

/// Everything an action needs, resolved once per run.
///
/// The locale root is created if missing and its files are enumerated once;
/// files created later in the run (e.g. by `-upgrade`) are not picked up.
pub struct RunContext {
    pub working_dir: PathBuf,
    pub layout: LocaleLayout,
    pub files: Vec<PathBuf>,
    pub verbose: bool,
}

impl RunContext {
    pub fn new(args: &Arguments, working_dir: &Path) -> Result<Self> {
        let config_result = load_config(working_dir)?;

        // In verbose mode, inform user if using default config
        if args.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(locale) = &args.default_locale {
            config.default_locale = locale.clone();
            config.validate()?;
        }

        let mut layout = config.layout(&config_result.base_dir);
        if let Some(root) = &args.locales_root {
            layout.root = working_dir.join(root);
        }

        fs::create_dir_all(&layout.root).with_context(|| {
            format!("Failed to create locale root: {}", layout.root.display())
        })?;
        let files = list_files(&layout.root);

        Ok(Self {
            working_dir: working_dir.to_path_buf(),
            layout,
            files,
            verbose: args.verbose,
        })
    }
}
