//! # Tâm Giao
//!
//! Front-end toolkit of the Tâm Giao counseling platform.
//!
//! Pages of the site often finish a flow with a full navigation (OTP
//! verification redirecting to the login page, a resent code bouncing back to
//! the verification form) and still need to tell the user what happened. This
//! crate provides the cross-navigation toast queue that carries those
//! notifications over the page load.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - toast receiver, presentation adapters, drain drivers
//! - `testing` - `RecordingToaster` and other test helpers
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use tamgiao::prelude::*;
//!
//! // Page A, right before `location.assign("/login")`
//! set_toast_in_session(
//!     ToastMessage::new("Account verified", "You can now sign in")
//!         .with_title_color("text-green-600"),
//! );
//!
//! // Page B, on load
//! let settings = ToastSettings::default();
//! mount_toast_receiver(DomToaster::from_settings(&settings), settings)?.detach();
//! ```

pub mod messages;
#[cfg(feature = "pages")]
pub mod pages;

/// Re-export commonly used types
pub mod prelude {
	pub use crate::messages::{
		MemoryStore, SessionStore, ToastError, ToastMessage, ToastSettings, set_toast,
		try_set_toast,
	};
	#[cfg(target_arch = "wasm32")]
	pub use crate::messages::{BrowserSessionStore, set_toast_in_session};

	#[cfg(feature = "pages")]
	pub use crate::pages::{ReceiverState, ToastProps, ToastReceiver, ToastView, Toaster};
	#[cfg(all(feature = "pages", target_arch = "wasm32"))]
	pub use crate::pages::{DomToaster, mount_toast_receiver};
	#[cfg(all(feature = "pages", not(target_arch = "wasm32")))]
	pub use crate::pages::spawn_drain;
}
