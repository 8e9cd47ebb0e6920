//! Toast settings
//!
//! Settings are plain data with defaults for every field, so a host can load
//! them from a `[toast]` section of its TOML configuration, override a few
//! fields in code, or just use [`ToastSettings::default`].

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Versioned storage slot shared by every producer and the receiver
pub const DEFAULT_STORAGE_KEY: &str = "tamgiao.toast_queue.v1";

/// Spacing between two displayed toasts
pub const DEFAULT_PACING_INTERVAL_MS: u64 = 500;

/// Layout class appended to every toast container
pub const DEFAULT_SUPPLEMENTAL_CLASS: &str = "mb-2";

/// Accessible label of the action button
pub const DEFAULT_CLOSE_LABEL: &str = "Close";

/// Element id the DOM toaster renders into
pub const DEFAULT_TOAST_CONTAINER_ID: &str = "toast-container";

/// Configuration of the toast queue
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tamgiao_messages::ToastSettings;
///
/// let settings = ToastSettings::from_toml_str(
///     r#"
///     storage_key = "toasts.v2"
///     pacing_interval_ms = 750
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(settings.storage_key, "toasts.v2");
/// assert_eq!(settings.pacing_interval(), Duration::from_millis(750));
/// assert_eq!(settings.close_label, "Close");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToastSettings {
	/// Session storage key holding the serialized queue
	pub storage_key: String,
	/// Milliseconds between two dispatches while draining
	pub pacing_interval_ms: u64,
	/// Class appended to each toast container's own class
	pub supplemental_class: String,
	/// Accessible label of the action button
	pub close_label: String,
	/// Id of the element the DOM toaster appends to
	pub toast_container_id: String,
}

impl Default for ToastSettings {
	fn default() -> Self {
		Self {
			storage_key: DEFAULT_STORAGE_KEY.to_string(),
			pacing_interval_ms: DEFAULT_PACING_INTERVAL_MS,
			supplemental_class: DEFAULT_SUPPLEMENTAL_CLASS.to_string(),
			close_label: DEFAULT_CLOSE_LABEL.to_string(),
			toast_container_id: DEFAULT_TOAST_CONTAINER_ID.to_string(),
		}
	}
}

impl ToastSettings {
	/// Parse and validate settings from a TOML document
	///
	/// Missing fields keep their defaults; unknown fields are rejected.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Check that the settings can drive a receiver
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.storage_key.trim().is_empty() {
			return Err(SettingsError::Invalid(
				"storage_key must not be empty".to_string(),
			));
		}
		if self.pacing_interval_ms == 0 {
			return Err(SettingsError::Invalid(
				"pacing_interval_ms must be greater than zero".to_string(),
			));
		}
		Ok(())
	}

	/// Use another storage key
	pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
		self.storage_key = key.into();
		self
	}

	/// Use another pacing interval
	///
	/// Sub-millisecond remainders round up, so any non-zero interval stays
	/// non-zero.
	pub fn with_pacing_interval(mut self, interval: Duration) -> Self {
		let millis = interval.as_micros().div_ceil(1000);
		self.pacing_interval_ms = u64::try_from(millis).unwrap_or(u64::MAX);
		self
	}

	/// Use another supplemental container class
	pub fn with_supplemental_class(mut self, class: impl Into<String>) -> Self {
		self.supplemental_class = class.into();
		self
	}

	/// Use another accessible close label
	pub fn with_close_label(mut self, label: impl Into<String>) -> Self {
		self.close_label = label.into();
		self
	}

	/// Use another container element id
	pub fn with_toast_container_id(mut self, id: impl Into<String>) -> Self {
		self.toast_container_id = id.into();
		self
	}

	/// Spacing between two dispatches
	pub fn pacing_interval(&self) -> Duration {
		Duration::from_millis(self.pacing_interval_ms)
	}
}
