//! Integration tests for the pages that produce toasts
//!
//! The OTP verification and resend-code flows queue a toast and then redirect;
//! the toast must show up on the page they land on, styled as queued.

use rstest::rstest;
use tamgiao::messages::{MemoryStore, ToastSettings, try_set_toast};
use tamgiao::pages::ToastView;
use tamgiao_integration_tests::{
	BrowserTab, ERROR_COLOR, SUCCESS_COLOR, otp_verification_toast, resend_code_toast, tab,
};

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_successful_verification_lands_on_login(tab: BrowserTab) {
	tab.set_toast(otp_verification_toast(true));

	let login = tab.navigate();
	login.drain.finished().await;

	let dispatches = login.toaster.dispatches();
	assert_eq!(dispatches.len(), 1);
	let props = &dispatches[0].props;
	assert_eq!(props.title.color_class.as_deref(), Some(SUCCESS_COLOR));
	assert!(props.action.is_none());
	assert_eq!(props.class_name, "mb-2");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_failed_verification_has_close_action(tab: BrowserTab) {
	tab.set_toast(otp_verification_toast(false));

	let page = tab.navigate();
	page.drain.finished().await;

	let dispatches = page.toaster.dispatches();
	let props = &dispatches[0].props;
	assert_eq!(props.title.color_class.as_deref(), Some(ERROR_COLOR));
	let action = props.action.as_ref().unwrap();
	assert_eq!(action.label, "Đóng");
	assert_eq!(action.alt_text, "Close");

	let html = ToastView::new(props.clone()).render();
	assert!(html.contains(r#"class="toast-title text-red-600""#));
	assert!(html.contains(r#"aria-label="Close""#));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_resend_then_verify_shows_both_in_order(tab: BrowserTab) {
	tab.set_toast(resend_code_toast());
	tab.set_toast(otp_verification_toast(true));

	let page = tab.navigate();
	page.drain.finished().await;

	assert_eq!(
		page.toaster.titles(),
		vec!["Đã gửi lại mã", "Xác thực thành công"]
	);
}

#[rstest]
fn test_full_storage_drops_toast_without_failing_producer() {
	let settings = ToastSettings::default();
	let storage = MemoryStore::new().with_quota(16);

	assert!(try_set_toast(&storage, &settings, resend_code_toast()).is_err());

	let tab = BrowserTab { storage, settings };
	tab.set_toast(resend_code_toast());
	assert!(!tab.has_stored_queue());
}
