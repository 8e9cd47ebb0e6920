//! `window.sessionStorage` backend (WASM only)

use super::SessionStore;
use crate::error::StorageError;
use wasm_bindgen::JsValue;

/// Session storage of the current tab
#[derive(Debug, Clone)]
pub struct BrowserSessionStore {
	storage: web_sys::Storage,
}

impl BrowserSessionStore {
	/// Open the current window's session storage
	///
	/// Fails with [`StorageError::Unavailable`] outside a window context or
	/// when the browser blocks storage access.
	pub fn new() -> Result<Self, StorageError> {
		let window = web_sys::window()
			.ok_or_else(|| StorageError::Unavailable("no global `window`".to_string()))?;
		let storage = window
			.session_storage()
			.map_err(|err| StorageError::Unavailable(describe(&err)))?
			.ok_or_else(|| StorageError::Unavailable("sessionStorage is disabled".to_string()))?;
		Ok(Self { storage })
	}

	/// Wrap an already obtained `Storage` object
	pub fn from_storage(storage: web_sys::Storage) -> Self {
		Self { storage }
	}
}

impl SessionStore for BrowserSessionStore {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		self.storage
			.get_item(key)
			.map_err(|err| StorageError::Backend(describe(&err)))
	}

	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.storage.set_item(key, value).map_err(|err| {
			if is_quota_error(&err) {
				StorageError::QuotaExceeded(describe(&err))
			} else {
				StorageError::Backend(describe(&err))
			}
		})
	}

	fn remove_item(&self, key: &str) -> Result<(), StorageError> {
		self.storage
			.remove_item(key)
			.map_err(|err| StorageError::Backend(describe(&err)))
	}
}

fn property(err: &JsValue, name: &str) -> Option<String> {
	js_sys::Reflect::get(err, &JsValue::from_str(name))
		.ok()
		.and_then(|value| value.as_string())
}

fn describe(err: &JsValue) -> String {
	property(err, "message")
		.or_else(|| err.as_string())
		.unwrap_or_else(|| format!("{err:?}"))
}

// Firefox reports quota errors under its own name.
fn is_quota_error(err: &JsValue) -> bool {
	matches!(
		property(err, "name").as_deref(),
		Some("QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED")
	)
}
