//! Cross-navigation toast queue
//!
//! Toast descriptors, the versioned session storage slot, storage backends
//! and the producer-side `set_toast`.
//!
//! ## Example
//!
//! ```rust
//! use tamgiao::messages::{MemoryStore, ToastMessage, ToastSettings, load_queue, set_toast};
//!
//! let store = MemoryStore::new();
//! let settings = ToastSettings::default();
//! set_toast(&store, &settings, ToastMessage::new("Code sent", "Check your inbox"));
//!
//! assert_eq!(load_queue(&store, &settings.storage_key).len(), 1);
//! ```

pub use tamgiao_messages::*;
