//! Saving the working dataset between sessions.

use log::warn;
use thiserror::Error;

use crate::graph::RelationshipMap;

/// Key the custom dataset is stored under.
pub const STORAGE_KEY: &str = "sociogram-data";

/// Failures reading or writing the saved dataset.
#[derive(Debug, Error)]
pub enum StorageError {
	/// No window or no `localStorage` on it.
	#[error("local storage is not available")]
	Unavailable,

	/// A storage call threw.
	#[error("storage call failed: {0}")]
	Js(String),

	/// The dataset did not serialize.
	#[error("could not encode dataset: {0}")]
	Serde(#[from] serde_json::Error),
}

/// Storage result.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Minimal string key-value store.
pub trait KeyValueStore {
	/// Value under `key`, if any.
	fn get(&self, key: &str) -> Result<Option<String>>;
	/// Store `value` under `key`.
	fn set(&self, key: &str, value: &str) -> Result<()>;
	/// Drop `key`.
	fn remove(&self, key: &str) -> Result<()>;
}

/// The browser's `window.localStorage`.
pub struct LocalStorage(web_sys::Storage);

impl LocalStorage {
	/// Open local storage for the current window.
	pub fn open() -> Result<Self> {
		let window = web_sys::window().ok_or(StorageError::Unavailable)?;
		window
			.local_storage()
			.map_err(|e| StorageError::Js(format!("{e:?}")))?
			.map(Self)
			.ok_or(StorageError::Unavailable)
	}
}

impl KeyValueStore for LocalStorage {
	fn get(&self, key: &str) -> Result<Option<String>> {
		self.0
			.get_item(key)
			.map_err(|e| StorageError::Js(format!("{e:?}")))
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		self.0
			.set_item(key, value)
			.map_err(|e| StorageError::Js(format!("{e:?}")))
	}

	fn remove(&self, key: &str) -> Result<()> {
		self.0
			.remove_item(key)
			.map_err(|e| StorageError::Js(format!("{e:?}")))
	}
}

/// Reads and writes the custom dataset under [`STORAGE_KEY`].
pub struct DatasetStore<S> {
	store: S,
}

impl<S: KeyValueStore> DatasetStore<S> {
	/// Wrap a key-value store.
	pub fn new(store: S) -> Self {
		Self { store }
	}

	/// The saved dataset, if one exists and decodes.
	pub fn load(&self) -> Option<RelationshipMap> {
		let raw = match self.store.get(STORAGE_KEY) {
			Ok(raw) => raw?,
			Err(e) => {
				warn!("Error loading saved data: {e}");
				return None;
			}
		};
		serde_json::from_str(&raw)
			.inspect_err(|e| warn!("Ignoring unreadable saved data: {e}"))
			.ok()
	}

	/// Write `relationships` as JSON.
	pub fn save(&self, relationships: &RelationshipMap) -> Result<()> {
		let json = serde_json::to_string(relationships)?;
		self.store.set(STORAGE_KEY, &json)
	}

	/// Forget the custom dataset.
	pub fn reset(&self) -> Result<()> {
		self.store.remove(STORAGE_KEY)
	}

	/// Whether anything is stored under the key, readable or not.
	pub fn has_custom_data(&self) -> bool {
		matches!(self.store.get(STORAGE_KEY), Ok(Some(_)))
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::collections::HashMap;

	use super::*;

	#[derive(Default)]
	struct MemoryStore(RefCell<HashMap<String, String>>);

	impl KeyValueStore for MemoryStore {
		fn get(&self, key: &str) -> Result<Option<String>> {
			Ok(self.0.borrow().get(key).cloned())
		}

		fn set(&self, key: &str, value: &str) -> Result<()> {
			self.0.borrow_mut().insert(key.into(), value.into());
			Ok(())
		}

		fn remove(&self, key: &str) -> Result<()> {
			self.0.borrow_mut().remove(key);
			Ok(())
		}
	}

	#[test]
	fn empty_store_has_no_dataset() {
		let store = DatasetStore::new(MemoryStore::default());
		assert!(store.load().is_none());
		assert!(!store.has_custom_data());
	}

	#[test]
	fn save_load_reset() {
		let store = DatasetStore::new(MemoryStore::default());
		let map: RelationshipMap = [("Amy", vec!["Bo"]), ("Bo", vec!["Amy", "Cy"])]
			.into_iter()
			.collect();

		store.save(&map).unwrap();
		assert!(store.has_custom_data());
		assert_eq!(store.load(), Some(map));

		store.reset().unwrap();
		assert!(store.load().is_none());
		assert!(!store.has_custom_data());
	}

	#[test]
	fn garbage_is_ignored_but_still_resettable() {
		let memory = MemoryStore::default();
		memory.set(STORAGE_KEY, "{not json").unwrap();
		let store = DatasetStore::new(memory);
		assert!(store.load().is_none());
		assert!(store.has_custom_data());

		store.reset().unwrap();
		assert!(!store.has_custom_data());
	}
}
