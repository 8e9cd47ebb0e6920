//! Toast receiver
//!
//! The receiver is the consumer half of the cross-navigation queue. It is
//! mounted once per page, claims whatever the previous page queued, and then
//! releases one toast per tick to the presentation subsystem.
//!
//! ```text
//!   mount ──► read queue ──┬─ absent / empty / invalid ──────────────► Idle
//!                          └─ toasts ─► clear storage ─► Draining ─┐
//!                                                        ▲         │ tick: dispatch front
//!                                                        └─────────┤
//!                                                                  └─ queue empty ─► Idle
//!   unmount (any state) ─────────────────────────────────────────────► Unmounted
//! ```
//!
//! The receiver itself holds no timer. A driver calls [`ToastReceiver::tick`]
//! once per pacing interval: [`spawn_drain`](crate::spawn_drain) on native
//! hosts, [`mount_toast_receiver`](crate::mount_toast_receiver) in the browser.

use std::collections::VecDeque;
use std::time::Duration;
use tamgiao_messages::{SessionStore, ToastMessage, ToastSettings, claim_queue, debug_log};

use crate::toaster::{ToastProps, Toaster};

/// Lifecycle state of a mounted receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverState {
	/// Claimed toasts remain to be shown
	Draining,
	/// Nothing left to show for this mount
	Idle,
	/// Torn down; never dispatches again
	Unmounted,
}

/// Shortest spacing a driver keeps between two ticks
pub const MIN_PACING_INTERVAL: Duration = Duration::from_millis(1);

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
	/// More toasts are waiting; keep the schedule running
	Continue,
	/// The schedule can stop
	Done,
}

/// Consumer of the cross-navigation toast queue
#[derive(Debug)]
pub struct ToastReceiver {
	queue: VecDeque<ToastMessage>,
	state: ReceiverState,
	settings: ToastSettings,
}

impl ToastReceiver {
	/// Mount the receiver on a page
	///
	/// Claims the stored queue: a non-empty queue is removed from storage
	/// before this returns, so it is gone even though nothing has been shown
	/// yet. Absent or invalid values leave storage untouched and the receiver
	/// idle.
	///
	/// # Examples
	///
	/// ```
	/// use tamgiao_messages::{MemoryStore, SessionStore, ToastMessage, ToastSettings, set_toast};
	/// use tamgiao_pages::{ReceiverState, ToastReceiver};
	///
	/// let store = MemoryStore::new();
	/// let settings = ToastSettings::default();
	/// set_toast(&store, &settings, ToastMessage::new("A", "d1"));
	///
	/// let receiver = ToastReceiver::mount(&store, settings.clone());
	/// assert_eq!(receiver.state(), ReceiverState::Draining);
	/// assert_eq!(receiver.pending(), 1);
	/// assert_eq!(store.get_item(&settings.storage_key).unwrap(), None);
	/// ```
	pub fn mount<S: SessionStore + ?Sized>(store: &S, settings: ToastSettings) -> Self {
		Self::from_queue(claim_queue(store, &settings.storage_key), settings)
	}

	/// Build a receiver over already claimed toasts
	pub fn from_queue(queue: impl IntoIterator<Item = ToastMessage>, settings: ToastSettings) -> Self {
		let queue: VecDeque<_> = queue.into_iter().collect();
		let state = if queue.is_empty() {
			ReceiverState::Idle
		} else {
			ReceiverState::Draining
		};
		debug_log!("toast receiver mounted with {} pending toast(s)", queue.len());

		Self {
			queue,
			state,
			settings,
		}
	}

	/// Current lifecycle state
	pub fn state(&self) -> ReceiverState {
		self.state
	}

	/// Whether a driver should keep ticking
	pub fn is_draining(&self) -> bool {
		self.state == ReceiverState::Draining
	}

	/// Number of toasts not yet dispatched
	pub fn pending(&self) -> usize {
		self.queue.len()
	}

	/// Settings the receiver was mounted with
	pub fn settings(&self) -> &ToastSettings {
		&self.settings
	}

	/// Spacing a driver must keep between two ticks
	///
	/// Never shorter than [`MIN_PACING_INTERVAL`], even when the settings
	/// carry a zero interval.
	pub fn pacing_interval(&self) -> Duration {
		self.settings.pacing_interval().max(MIN_PACING_INTERVAL)
	}

	/// Dispatch the front toast, if draining
	///
	/// Exactly one toast is dispatched per call. Once the last one is out the
	/// receiver becomes idle and the call returns [`TickOutcome::Done`].
	pub fn tick<T: Toaster + ?Sized>(&mut self, toaster: &T) -> TickOutcome {
		if self.state != ReceiverState::Draining {
			return TickOutcome::Done;
		}

		if let Some(message) = self.queue.pop_front() {
			toaster.toast(ToastProps::from_message(&message, &self.settings));
		}

		if self.queue.is_empty() {
			self.state = ReceiverState::Idle;
			TickOutcome::Done
		} else {
			TickOutcome::Continue
		}
	}

	/// Tear the receiver down, discarding undisplayed toasts
	pub fn unmount(&mut self) {
		if !self.queue.is_empty() {
			debug_log!("toast receiver unmounted with {} undisplayed toast(s)", self.queue.len());
		}
		self.queue.clear();
		self.state = ReceiverState::Unmounted;
	}
}
