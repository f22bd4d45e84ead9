//! CLI argument definitions using clap.
//!
//! Global options are regular `--long` flags and must come first. Actions
//! use the historical single-dash spelling (`-add`, `-upgrade`, ...), are
//! collected verbatim and run in the order given. Unknown actions are
//! ignored.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Locale root directory (overrides config file)
    #[arg(long, env = "LOKIT_LOCALES_ROOT")]
    pub locales_root: Option<PathBuf>,

    /// Default locale used by -upgrade (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Print every file that is written
    #[arg(long)]
    pub verbose: bool,

    /// Actions to run in order: -add, -remove, -change-key, -decode, -upgrade, -init
    #[arg(
        value_name = "ACTION",
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub actions: Vec<String>,
}

impl Arguments {
    /// Recognized actions in command-line order.
    pub fn actions(&self) -> Vec<Action> {
        self.actions
            .iter()
            .filter_map(|flag| Action::from_flag(flag))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Prompt for a message and add its key to every locale file.
    Add,
    /// Prompt for a key and remove it from every locale file.
    Remove,
    /// Prompt for an old and a new key and rename it everywhere.
    ChangeKey,
    /// Reload and re-save every locale file.
    Decode,
    /// Fill every configured locale with the default locale's keys.
    Upgrade,
    /// Write a default configuration file.
    Init,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Add,
        Action::Remove,
        Action::ChangeKey,
        Action::Decode,
        Action::Upgrade,
        Action::Init,
    ];

    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.flag() == flag)
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Action::Add => "-add",
            Action::Remove => "-remove",
            Action::ChangeKey => "-change-key",
            Action::Decode => "-decode",
            Action::Upgrade => "-upgrade",
            Action::Init => "-init",
        }
    }
}
