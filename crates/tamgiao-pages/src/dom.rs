//! Browser integration (WASM only)
//!
//! [`mount_toast_receiver`] is what a page calls once after it loads. It
//! claims the queue from `sessionStorage` and drains it with `setInterval`.
//! [`DomToaster`] is a minimal presentation subsystem that appends rendered
//! toasts to a container element.

use std::cell::Cell;
use std::rc::Rc;

use tamgiao_messages::{BrowserSessionStore, ToastSettings, error_log, warn_log};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::error::{PagesError, Result};
use crate::receiver::{TickOutcome, ToastReceiver};
use crate::toaster::{ToastProps, Toaster};
use crate::view::ToastView;

/// Toaster appending rendered toasts to an element of the page
#[derive(Debug, Clone)]
pub struct DomToaster {
	container_id: String,
}

impl DomToaster {
	/// Render into the element with the given id
	pub fn new(container_id: impl Into<String>) -> Self {
		Self {
			container_id: container_id.into(),
		}
	}

	/// Render into the container configured in `settings`
	pub fn from_settings(settings: &ToastSettings) -> Self {
		Self::new(settings.toast_container_id.clone())
	}
}

impl Toaster for DomToaster {
	fn toast(&self, props: ToastProps) {
		let Some(document) = web_sys::window().and_then(|window| window.document()) else {
			warn_log!("no document to render toast {:?}", props.title.text);
			return;
		};
		let Some(container) = document.get_element_by_id(&self.container_id) else {
			warn_log!("toast container #{} not found", self.container_id);
			return;
		};

		let html = ToastView::new(props).render();
		if let Err(err) = container.insert_adjacent_html("beforeend", &html) {
			error_log!("failed to render toast: {:?}", err);
		}
	}
}

/// Handle of a receiver mounted in the browser
///
/// Dropping the handle clears the interval, like a component leaving the
/// page. Call [`detach`](Self::detach) to let the drain run for the rest of
/// the page's life instead.
pub struct ToastReceiverHandle {
	interval_id: Rc<Cell<Option<i32>>>,
	callback: Option<Closure<dyn FnMut()>>,
}

impl ToastReceiverHandle {
	fn inert() -> Self {
		Self {
			interval_id: Rc::new(Cell::new(None)),
			callback: None,
		}
	}

	/// Whether the interval is still scheduled
	pub fn is_active(&self) -> bool {
		self.interval_id.get().is_some()
	}

	/// Stop draining; no toast is dispatched afterwards
	pub fn unmount(mut self) {
		self.teardown();
	}

	/// Keep draining until the queue is empty without holding the handle
	pub fn detach(mut self) {
		if let Some(callback) = self.callback.take() {
			callback.forget();
		}
	}

	fn teardown(&mut self) {
		clear_interval(&self.interval_id);
		self.callback = None;
	}
}

impl Drop for ToastReceiverHandle {
	fn drop(&mut self) {
		if self.callback.is_some() {
			self.teardown();
		}
	}
}

fn clear_interval(interval_id: &Cell<Option<i32>>) {
	if let (Some(id), Some(window)) = (interval_id.take(), web_sys::window()) {
		window.clear_interval_with_handle(id);
	}
}

/// Mount a toast receiver on the current page
///
/// Claims the queue stored in the tab's `sessionStorage` and dispatches one
/// toast to `toaster` per pacing interval. The interval clears itself once
/// the queue is empty.
///
/// ```ignore
/// use tamgiao_messages::ToastSettings;
/// use tamgiao_pages::{DomToaster, mount_toast_receiver};
///
/// let settings = ToastSettings::default();
/// let toaster = DomToaster::from_settings(&settings);
/// mount_toast_receiver(toaster, settings)?.detach();
/// ```
pub fn mount_toast_receiver<T>(toaster: T, settings: ToastSettings) -> Result<ToastReceiverHandle>
where
	T: Toaster + 'static,
{
	let store = BrowserSessionStore::new()?;
	let mut receiver = ToastReceiver::mount(&store, settings);
	if !receiver.is_draining() {
		return Ok(ToastReceiverHandle::inert());
	}

	let window = web_sys::window().ok_or(PagesError::NoWindow)?;
	let timeout = i32::try_from(receiver.pacing_interval().as_millis()).unwrap_or(i32::MAX);
	let interval_id = Rc::new(Cell::new(None));

	let callback = Closure::<dyn FnMut()>::new({
		let interval_id = Rc::clone(&interval_id);
		move || {
			if receiver.tick(&toaster) == TickOutcome::Done {
				clear_interval(&interval_id);
			}
		}
	});

	let id = window
		.set_interval_with_callback_and_timeout_and_arguments_0(
			callback.as_ref().unchecked_ref(),
			timeout,
		)
		.map_err(|err| PagesError::Scheduler(format!("{err:?}")))?;
	interval_id.set(Some(id));

	Ok(ToastReceiverHandle {
		interval_id,
		callback: Some(callback),
	})
}
