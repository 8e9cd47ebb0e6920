//! Test helpers for code that drains toasts
//!
//! Enabled by the `testing` feature. Timestamps come from the tokio clock so
//! they follow `tokio::time::pause`.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::time::Instant;

use crate::toaster::{ToastProps, Toaster};

/// One recorded dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
	/// When the toaster was called
	pub at: Instant,
	/// What it was called with
	pub props: ToastProps,
}

/// Toaster that records every dispatch
///
/// Clones share the same record, so one clone can be handed to a driver while
/// the test keeps the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingToaster {
	dispatches: Arc<Mutex<Vec<Dispatch>>>,
}

impl RecordingToaster {
	/// Create an empty recorder
	pub fn new() -> Self {
		Self::default()
	}

	/// Every dispatch so far, oldest first
	pub fn dispatches(&self) -> Vec<Dispatch> {
		self.dispatches.lock().clone()
	}

	/// Titles of the dispatched toasts, oldest first
	pub fn titles(&self) -> Vec<String> {
		self.dispatches
			.lock()
			.iter()
			.map(|dispatch| dispatch.props.title.text.clone())
			.collect()
	}

	/// Dispatch timestamps, oldest first
	pub fn dispatch_times(&self) -> Vec<Instant> {
		self.dispatches.lock().iter().map(|dispatch| dispatch.at).collect()
	}

	/// Number of dispatches
	pub fn len(&self) -> usize {
		self.dispatches.lock().len()
	}

	/// Whether nothing was dispatched
	pub fn is_empty(&self) -> bool {
		self.dispatches.lock().is_empty()
	}
}

impl Toaster for RecordingToaster {
	fn toast(&self, props: ToastProps) {
		self.dispatches.lock().push(Dispatch {
			at: Instant::now(),
			props,
		});
	}
}
