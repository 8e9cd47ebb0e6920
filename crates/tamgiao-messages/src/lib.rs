//! Cross-navigation toast queue for Tâm Giao
//!
//! Pages raise notifications right before a full navigation (for example after
//! the OTP flow verifies an account and redirects to the login page). The
//! notifications cannot live in memory because the next document starts from a
//! fresh WASM instance, so they are appended to a list kept in tab-scoped
//! session storage and drained by the receiver on the next page.
//!
//! ## Features
//!
//! - **Toast descriptors**: [`ToastMessage`] with the JSON schema shared by every producer
//! - **Versioned storage slot**: one well-known key, validated structurally on read
//! - **Storage backends**: [`MemoryStore`] everywhere, [`BrowserSessionStore`] on `wasm32`
//! - **Best-effort enqueuer**: [`set_toast`] never fails the calling page
//! - **Settings**: [`ToastSettings`] loaded from TOML or built in code
//!
//! ## Example
//!
//! ```rust
//! use tamgiao_messages::{MemoryStore, ToastMessage, ToastSettings, load_queue, set_toast};
//!
//! let store = MemoryStore::new();
//! let settings = ToastSettings::default();
//!
//! set_toast(&store, &settings, ToastMessage::new("Verified", "Your account is ready"));
//! set_toast(
//!     &store,
//!     &settings,
//!     ToastMessage::new("Code sent", "Check your inbox").with_action("Close"),
//! );
//!
//! let queue = load_queue(&store, &settings.storage_key);
//! assert_eq!(queue.len(), 2);
//! assert_eq!(queue[0].title, "Verified");
//! ```

pub mod enqueue;
pub mod error;
pub mod logging;
pub mod message;
pub mod queue;
pub mod settings;
pub mod storage;

pub use enqueue::{set_toast, try_set_toast};
#[cfg(target_arch = "wasm32")]
pub use enqueue::set_toast_in_session;
pub use error::{QueueReadError, SettingsError, StorageError, ToastError};
pub use message::ToastMessage;
pub use queue::{claim_queue, decode_queue, encode_queue, load_queue, read_queue, write_queue};
pub use settings::ToastSettings;
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserSessionStore;
pub use storage::{MemoryStore, SessionStore};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::enqueue::*;
	pub use crate::error::*;
	pub use crate::message::*;
	pub use crate::settings::*;
	pub use crate::storage::*;
}

// Paths used by the exported logging macros.
#[doc(hidden)]
pub mod __private {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
