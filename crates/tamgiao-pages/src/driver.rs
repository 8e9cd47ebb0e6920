//! Native drain driver
//!
//! Runs a mounted [`ToastReceiver`] on a tokio task. Used by SSR hosts and
//! by tests, where the paused tokio clock makes the pacing observable.

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use tamgiao_messages::error_log;

use crate::receiver::{TickOutcome, ToastReceiver};
use crate::toaster::Toaster;

/// Handle of a running drain
///
/// Dropping the handle unmounts the receiver, like a component leaving the
/// page.
#[derive(Debug)]
pub struct DrainHandle {
	task: Option<JoinHandle<()>>,
}

impl DrainHandle {
	/// Stop draining immediately; no toast is dispatched afterwards
	pub fn unmount(mut self) {
		self.abort();
	}

	/// Whether the drain has ended (queue exhausted or never started)
	pub fn is_finished(&self) -> bool {
		self.task.as_ref().is_none_or(JoinHandle::is_finished)
	}

	/// Wait until every claimed toast has been dispatched
	///
	/// A drain ended by a panicking toaster is logged rather than propagated.
	pub async fn finished(mut self) {
		if let Some(task) = self.task.take()
			&& let Err(err) = task.await
			&& err.is_panic()
		{
			error_log!("toast drain stopped early: {}", err);
		}
	}

	fn abort(&mut self) {
		if let Some(task) = self.task.take() {
			task.abort();
		}
	}
}

impl Drop for DrainHandle {
	fn drop(&mut self) {
		self.abort();
	}
}

/// Drive `receiver` on the current tokio runtime
///
/// The first toast goes out one pacing interval after the call, the next ones
/// one interval apart. A late tick delays the following ones instead of
/// bursting, so two toasts are never closer than the interval. An idle
/// receiver spawns nothing.
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use tamgiao_messages::{MemoryStore, ToastMessage, ToastSettings, set_toast};
/// use tamgiao_pages::{ToastProps, ToastReceiver, spawn_drain};
///
/// let store = MemoryStore::new();
/// let settings = ToastSettings::default();
/// set_toast(&store, &settings, ToastMessage::new("A", "d1"));
///
/// let receiver = ToastReceiver::mount(&store, settings);
/// let handle = spawn_drain(receiver, |props: ToastProps| println!("{}", props.title.text));
/// handle.finished().await;
/// # }
/// ```
pub fn spawn_drain<T>(mut receiver: ToastReceiver, toaster: T) -> DrainHandle
where
	T: Toaster + Send + 'static,
{
	if !receiver.is_draining() {
		return DrainHandle { task: None };
	}

	let period = receiver.pacing_interval();
	let task = tokio::spawn(async move {
		let mut ticker = interval_at(Instant::now() + period, period);
		ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

		loop {
			ticker.tick().await;
			if receiver.tick(&toaster) == TickOutcome::Done {
				break;
			}
		}
	});

	DrainHandle { task: Some(task) }
}
