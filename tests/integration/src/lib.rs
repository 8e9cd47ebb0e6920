//! Shared fixtures for the Tâm Giao integration tests
//!
//! A [`BrowserTab`] stands in for one browser tab: its session storage
//! outlives every page loaded in it, while each [`LoadedPage`] gets a fresh
//! receiver, exactly like a full navigation starting a new document.

use rstest::fixture;
use tamgiao::messages::{MemoryStore, ToastMessage, ToastSettings, set_toast};
use tamgiao::pages::testing::RecordingToaster;
use tamgiao::pages::{DrainHandle, ToastReceiver, spawn_drain};

/// Title color used by producers for successful outcomes
pub const SUCCESS_COLOR: &str = "text-green-600";

/// Title color used by producers for failures
pub const ERROR_COLOR: &str = "text-red-600";

/// One browser tab and its session storage
#[derive(Debug, Clone)]
pub struct BrowserTab {
	pub storage: MemoryStore,
	pub settings: ToastSettings,
}

/// A page loaded in a tab, with its mounted toast receiver
pub struct LoadedPage {
	pub toaster: RecordingToaster,
	pub drain: DrainHandle,
	pub pending_at_mount: usize,
}

impl BrowserTab {
	pub fn new(settings: ToastSettings) -> Self {
		Self {
			storage: MemoryStore::new(),
			settings,
		}
	}

	/// Queue a toast from the current page
	pub fn set_toast(&self, message: ToastMessage) {
		set_toast(&self.storage, &self.settings, message);
	}

	/// Load a new document in the tab and mount its toast receiver
	pub fn navigate(&self) -> LoadedPage {
		let receiver = ToastReceiver::mount(&self.storage, self.settings.clone());
		let pending_at_mount = receiver.pending();
		let toaster = RecordingToaster::new();
		let drain = spawn_drain(receiver, toaster.clone());

		LoadedPage {
			toaster,
			drain,
			pending_at_mount,
		}
	}

	/// Whether the toast queue slot currently holds a value
	pub fn has_stored_queue(&self) -> bool {
		self.storage.contains_key(&self.settings.storage_key)
	}
}

#[fixture]
pub fn tab() -> BrowserTab {
	BrowserTab::new(ToastSettings::default())
}

/// What the OTP verification page queues before redirecting
pub fn otp_verification_toast(verified: bool) -> ToastMessage {
	if verified {
		ToastMessage::new(
			"Xác thực thành công",
			"Tài khoản của bạn đã được kích hoạt",
		)
		.with_title_color(SUCCESS_COLOR)
	} else {
		ToastMessage::new("Xác thực thất bại", "Mã OTP không hợp lệ hoặc đã hết hạn")
			.with_title_color(ERROR_COLOR)
			.with_action("Đóng")
	}
}

/// What the resend-code flow queues before reloading the verification page
pub fn resend_code_toast() -> ToastMessage {
	ToastMessage::new("Đã gửi lại mã", "Vui lòng kiểm tra email của bạn")
		.with_title_color(SUCCESS_COLOR)
}
