//! Locale file maintenance engine.
//!
//! - `discovery`: enumerate the files of a locale set
//! - `messages`: load/store message files in canonical form
//! - `key`: derive lowerCamelCase keys from message text
//! - `operations`: add, remove, rename and re-encode across a locale set
//! - `upgrade`: fill configured locales with the default locale's keys

pub mod discovery;
pub mod key;
pub mod messages;
pub mod operations;
pub mod upgrade;

pub use discovery::list_files;
pub use key::lower_camel_case;
pub use messages::{
    LoadedMessages, MessageLoadWarning, Messages, load_messages, store_messages,
};
pub use operations::{
    AddedItem, OperationReport, add_item, change_key, decode_characters, remove_item,
};
pub use upgrade::{LocaleLayout, UpgradeReport, upgrade};
