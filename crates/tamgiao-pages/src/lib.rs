//! Tâm Giao Pages - toast receiver and presentation adapters
//!
//! The page-side half of the cross-navigation toast queue. Producers enqueue
//! toasts with [`tamgiao_messages::set_toast`] before navigating away; the
//! next page mounts a [`ToastReceiver`], which claims the queue and shows one
//! toast per pacing interval.
//!
//! ## Architecture
//!
//! - [`receiver`]: the drain state machine, free of timers
//! - [`toaster`]: the presentation seam ([`Toaster`], [`ToastProps`])
//! - [`view`]: HTML rendering of a toast
//! - `driver`: tokio-driven drain for native hosts
//! - `dom`: `setInterval`-driven drain and DOM toaster for the browser
//! - `testing`: [`RecordingToaster`](testing::RecordingToaster) (`testing` feature)
//!
//! ## Example
//!
//! ```ignore
//! use tamgiao_messages::ToastSettings;
//! use tamgiao_pages::{DomToaster, mount_toast_receiver};
//!
//! // On page load
//! let settings = ToastSettings::default();
//! mount_toast_receiver(DomToaster::from_settings(&settings), settings)?.detach();
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod receiver;
pub mod toaster;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(not(target_arch = "wasm32"))]
pub mod driver;
#[cfg(all(any(test, feature = "testing"), not(target_arch = "wasm32")))]
pub mod testing;

pub use error::{PagesError, Result};
pub use receiver::{MIN_PACING_INTERVAL, ReceiverState, TickOutcome, ToastReceiver};
pub use toaster::{ToastAction, ToastProps, ToastTitle, Toaster};
pub use view::ToastView;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomToaster, ToastReceiverHandle, mount_toast_receiver};
#[cfg(not(target_arch = "wasm32"))]
pub use driver::{DrainHandle, spawn_drain};
