//! Producer side of the toast queue
//!
//! Pages call [`set_toast`] right before they trigger a full navigation. The
//! call reads the current queue (empty when unreadable), appends the toast and
//! writes the whole list back. It never navigates by itself.

use crate::error::Result;
use crate::message::ToastMessage;
use crate::queue::{load_queue, write_queue};
use crate::settings::ToastSettings;
use crate::storage::SessionStore;
use crate::warn_log;

/// Append a toast to the stored queue, reporting write failures
///
/// A malformed existing value is replaced by a queue holding only the new
/// toast.
///
/// # Examples
///
/// ```
/// use tamgiao_messages::{MemoryStore, StorageError, ToastError, ToastMessage, ToastSettings, try_set_toast};
///
/// let settings = ToastSettings::default();
///
/// let store = MemoryStore::new();
/// assert!(try_set_toast(&store, &settings, ToastMessage::new("A", "d1")).is_ok());
///
/// let full = MemoryStore::new().with_quota(8);
/// let err = try_set_toast(&full, &settings, ToastMessage::new("A", "d1")).unwrap_err();
/// assert!(matches!(err, ToastError::Storage(StorageError::QuotaExceeded(_))));
/// ```
pub fn try_set_toast<S: SessionStore + ?Sized>(
	store: &S,
	settings: &ToastSettings,
	message: ToastMessage,
) -> Result<()> {
	let mut queue = load_queue(store, &settings.storage_key);
	queue.push(message);
	write_queue(store, &settings.storage_key, &queue)
}

/// Append a toast to the stored queue, best effort
///
/// Toasts are best-effort notifications: when the write fails (quota, storage
/// disabled) the toast is dropped with a warning and the calling page carries
/// on with its navigation.
pub fn set_toast<S: SessionStore + ?Sized>(
	store: &S,
	settings: &ToastSettings,
	message: ToastMessage,
) {
	let title = message.title.clone();
	if let Err(err) = try_set_toast(store, settings, message) {
		warn_log!("dropping toast {:?}: {}", title, err);
	}
}

/// Append a toast to the current tab's `sessionStorage` with default settings
#[cfg(target_arch = "wasm32")]
pub fn set_toast_in_session(message: ToastMessage) {
	match crate::storage::BrowserSessionStore::new() {
		Ok(store) => set_toast(&store, &ToastSettings::default(), message),
		Err(err) => warn_log!("dropping toast {:?}: {}", message.title, err),
	}
}
