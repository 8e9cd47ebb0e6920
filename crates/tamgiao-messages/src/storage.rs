//! Tab-scoped key-value storage backends
//!
//! The queue only needs the three `Storage` operations the browser exposes, so
//! the backend is a small trait. [`MemoryStore`] backs tests and native hosts;
//! [`BrowserSessionStore`] wraps `window.sessionStorage` on `wasm32`.

use crate::error::StorageError;

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserSessionStore;
pub use memory::MemoryStore;

/// Key-value storage that survives a full navigation within one tab
pub trait SessionStore {
	/// Read the value stored under `key`, `None` when absent
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

	/// Store `value` under `key`, replacing any previous value
	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

	/// Delete `key`; deleting an absent key succeeds
	fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		(**self).get_item(key)
	}

	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
		(**self).set_item(key, value)
	}

	fn remove_item(&self, key: &str) -> Result<(), StorageError> {
		(**self).remove_item(key)
	}
}
