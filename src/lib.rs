//! lokit - maintenance tool for per-locale `messages.json` files
//!
//! lokit keeps a `_locales/<locale>/messages.json` tree in shape: it adds,
//! removes and renames message keys across every locale, normalizes file
//! formatting, and fills every configured locale with the keys of the
//! default locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, prompts, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Locale file operations

pub mod cli;
pub mod config;
pub mod core;
