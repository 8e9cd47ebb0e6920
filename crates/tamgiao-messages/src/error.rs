//! Error types for the toast queue

use thiserror::Error;

/// Failure reported by a [`SessionStore`](crate::storage::SessionStore) backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
	/// Storage cannot be reached (no window, storage disabled by the browser)
	#[error("session storage is unavailable: {0}")]
	Unavailable(String),

	/// The write would exceed the storage quota
	#[error("session storage quota exceeded: {0}")]
	QuotaExceeded(String),

	/// Any other backend failure
	#[error("session storage error: {0}")]
	Backend(String),
}

/// Reasons a stored queue could not be trusted
///
/// Every variant is recovered as an empty queue; none of them reaches the user.
#[derive(Debug, Error)]
pub enum QueueReadError {
	/// The stored value is not valid JSON
	#[error("stored toast queue is not valid JSON: {0}")]
	Malformed(#[from] serde_json::Error),

	/// The stored value is JSON but not an array
	#[error("stored toast queue is not a list")]
	NotAList,

	/// An element does not match the toast schema
	#[error("stored toast #{index} is invalid: {reason}")]
	InvalidEntry {
		/// Position of the offending element
		index: usize,
		/// What was wrong with it
		reason: String,
	},

	/// The backend failed while reading
	#[error(transparent)]
	Storage(#[from] StorageError),
}

/// Error returned by [`try_set_toast`](crate::enqueue::try_set_toast)
#[derive(Debug, Error)]
pub enum ToastError {
	/// The updated queue could not be written
	#[error("failed to persist toast queue: {0}")]
	Storage(#[from] StorageError),

	/// The updated queue could not be serialized
	#[error("failed to serialize toast queue: {0}")]
	Serialize(#[from] serde_json::Error),
}

/// Error raised while loading [`ToastSettings`](crate::settings::ToastSettings)
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The TOML document could not be parsed
	#[error("failed to parse toast settings: {0}")]
	Parse(#[from] toml::de::Error),

	/// A value is outside its allowed range
	#[error("invalid toast settings: {0}")]
	Invalid(String),
}

/// Result type for toast queue operations
pub type Result<T> = std::result::Result<T, ToastError>;
