//! Where relationship data comes from: the built-in roster, pasted text, and
//! the browser's local storage.

pub mod defaults;
pub mod parse;
pub mod storage;

pub use defaults::default_relationships;
pub use parse::{ParseError, parse_relationships};
pub use storage::{DatasetStore, KeyValueStore, LocalStorage, STORAGE_KEY, StorageError};
