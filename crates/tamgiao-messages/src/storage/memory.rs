//! In-memory session storage backend

use super::SessionStore;
use crate::error::StorageError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory session storage
///
/// Clones share the same data, which is how tests simulate a full navigation:
/// the producer page and the next page each get a clone of one store.
/// An optional byte quota mirrors the browser's per-origin limit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	data: Arc<Mutex<HashMap<String, String>>>,
	quota: Option<usize>,
	disabled: bool,
}

impl MemoryStore {
	/// Create an empty store without quota
	///
	/// # Examples
	///
	/// ```
	/// use tamgiao_messages::{MemoryStore, SessionStore};
	///
	/// let store = MemoryStore::new();
	/// store.set_item("key", "value").unwrap();
	/// assert_eq!(store.get_item("key").unwrap(), Some("value".to_string()));
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a store with initial data
	pub fn with_data(data: HashMap<String, String>) -> Self {
		Self {
			data: Arc::new(Mutex::new(data)),
			..Self::default()
		}
	}

	/// Limit the total size of keys and values, in bytes
	pub fn with_quota(mut self, bytes: usize) -> Self {
		self.quota = Some(bytes);
		self
	}

	/// Create a store that rejects every operation, like a browser with
	/// storage turned off
	pub fn disabled() -> Self {
		Self {
			disabled: true,
			..Self::default()
		}
	}

	/// Number of stored keys
	pub fn len(&self) -> usize {
		self.data.lock().len()
	}

	/// Whether nothing is stored
	pub fn is_empty(&self) -> bool {
		self.data.lock().is_empty()
	}

	/// Whether `key` is present
	pub fn contains_key(&self, key: &str) -> bool {
		self.data.lock().contains_key(key)
	}

	/// Remove every key
	pub fn clear(&self) {
		self.data.lock().clear();
	}

	fn check_enabled(&self) -> Result<(), StorageError> {
		if self.disabled {
			return Err(StorageError::Unavailable(
				"storage is disabled".to_string(),
			));
		}
		Ok(())
	}
}

impl SessionStore for MemoryStore {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		self.check_enabled()?;
		Ok(self.data.lock().get(key).cloned())
	}

	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.check_enabled()?;
		let mut data = self.data.lock();

		if let Some(quota) = self.quota {
			let others: usize = data
				.iter()
				.filter(|(k, _)| k.as_str() != key)
				.map(|(k, v)| k.len() + v.len())
				.sum();
			let needed = others + key.len() + value.len();
			if needed > quota {
				return Err(StorageError::QuotaExceeded(format!(
					"writing `{key}` needs {needed} bytes, quota is {quota}"
				)));
			}
		}

		data.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove_item(&self, key: &str) -> Result<(), StorageError> {
		self.check_enabled()?;
		self.data.lock().remove(key);
		Ok(())
	}
}
