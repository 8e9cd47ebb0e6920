//! Integration tests for toasts surviving a full navigation
//!
//! Each test queues toasts in one page of a [`BrowserTab`], navigates, and
//! observes what the receiver of the next page dispatches.

use rstest::rstest;
use std::time::Duration;
use tamgiao::messages::{SessionStore, ToastMessage, ToastSettings};
use tamgiao_integration_tests::{BrowserTab, tab};
use tokio::time::Instant;

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_two_toasts_survive_navigation(tab: BrowserTab) {
	tab.set_toast(ToastMessage::new("A", "d1"));
	tab.set_toast(ToastMessage::new("B", "d2").with_action("Close"));

	let mounted_at = Instant::now();
	let page = tab.navigate();
	assert_eq!(page.pending_at_mount, 2);
	assert!(!tab.has_stored_queue());

	page.drain.finished().await;

	let dispatches = page.toaster.dispatches();
	assert_eq!(dispatches.len(), 2);
	assert_eq!(dispatches[0].props.title.text, "A");
	assert!(dispatches[0].props.action.is_none());
	assert_eq!(dispatches[1].props.title.text, "B");
	assert_eq!(
		dispatches[1].props.action.as_ref().map(|action| action.label.as_str()),
		Some("Close")
	);
	assert!(dispatches[0].at - mounted_at >= Duration::from_millis(500));
	assert!(dispatches[1].at - dispatches[0].at >= Duration::from_millis(500));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_reload_during_drain_does_not_replay(tab: BrowserTab) {
	for title in ["A", "B", "C"] {
		tab.set_toast(ToastMessage::new(title, "d"));
	}

	let first = tab.navigate();
	tokio::time::sleep(Duration::from_millis(600)).await;
	first.drain.unmount();

	let reloaded = tab.navigate();
	assert_eq!(reloaded.pending_at_mount, 0);
	tokio::time::sleep(Duration::from_secs(3)).await;

	assert_eq!(first.toaster.titles(), vec!["A"]);
	assert!(reloaded.toaster.is_empty());
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_toasts_queued_while_draining_wait_for_next_page(tab: BrowserTab) {
	tab.set_toast(ToastMessage::new("A", "d1"));
	let page = tab.navigate();

	tab.set_toast(ToastMessage::new("B", "d2"));
	page.drain.finished().await;
	assert_eq!(page.toaster.titles(), vec!["A"]);
	assert!(tab.has_stored_queue());

	let next = tab.navigate();
	next.drain.finished().await;
	assert_eq!(next.toaster.titles(), vec!["B"]);
}

#[rstest]
#[case("not json")]
#[case("{}")]
#[case(r#"[{"title":"A","description":7}]"#)]
#[tokio::test(start_paused = true)]
async fn test_invalid_stored_value_shows_nothing(tab: BrowserTab, #[case] raw: &str) {
	tab.storage.set_item(&tab.settings.storage_key, raw).unwrap();

	let page = tab.navigate();
	tokio::time::sleep(Duration::from_secs(2)).await;

	assert!(page.toaster.is_empty());
	assert!(page.drain.is_finished());
	assert_eq!(
		tab.storage.get_item(&tab.settings.storage_key).unwrap().as_deref(),
		Some(raw)
	);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_producer_overwrites_invalid_value(tab: BrowserTab) {
	tab.storage.set_item(&tab.settings.storage_key, "{}").unwrap();
	tab.set_toast(ToastMessage::new("A", "d1"));

	let page = tab.navigate();
	page.drain.finished().await;

	assert_eq!(page.toaster.titles(), vec!["A"]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_tabs_with_different_keys_are_independent() {
	let otp = BrowserTab::new(ToastSettings::default());
	let other = BrowserTab {
		storage: otp.storage.clone(),
		settings: ToastSettings::default().with_storage_key("tamgiao.toast_queue.v2"),
	};

	otp.set_toast(ToastMessage::new("v1", "d"));
	other.set_toast(ToastMessage::new("v2", "d"));

	let page = otp.navigate();
	page.drain.finished().await;

	assert_eq!(page.toaster.titles(), vec!["v1"]);
	assert!(other.has_stored_queue());
}
