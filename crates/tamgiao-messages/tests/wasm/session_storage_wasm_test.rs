//! Browser session storage tests
//!
//! Run with `wasm-pack test --headless --chrome crates/tamgiao-messages`.

#![cfg(target_arch = "wasm32")]

use tamgiao_messages::{
	BrowserSessionStore, SessionStore, ToastMessage, ToastSettings, claim_queue, load_queue,
	set_toast, set_toast_in_session,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_store(key: &str) -> BrowserSessionStore {
	let store = BrowserSessionStore::new().unwrap();
	store.remove_item(key).unwrap();
	store
}

#[wasm_bindgen_test]
fn test_round_trip_through_session_storage() {
	let settings = ToastSettings::default().with_storage_key("wasm-test.round-trip");
	let store = fresh_store(&settings.storage_key);

	set_toast(&store, &settings, ToastMessage::new("A", "d1"));
	set_toast(
		&store,
		&settings,
		ToastMessage::new("B", "d2").with_action("Close"),
	);

	let queue = load_queue(&store, &settings.storage_key);
	assert_eq!(queue.len(), 2);
	assert_eq!(queue[1].action_text.as_deref(), Some("Close"));
}

#[wasm_bindgen_test]
fn test_claim_clears_session_storage() {
	let settings = ToastSettings::default().with_storage_key("wasm-test.claim");
	let store = fresh_store(&settings.storage_key);
	set_toast(&store, &settings, ToastMessage::new("A", "d1"));

	assert_eq!(claim_queue(&store, &settings.storage_key).len(), 1);
	assert_eq!(store.get_item(&settings.storage_key).unwrap(), None);
}

#[wasm_bindgen_test]
fn test_malformed_value_is_ignored() {
	let settings = ToastSettings::default().with_storage_key("wasm-test.malformed");
	let store = fresh_store(&settings.storage_key);
	store.set_item(&settings.storage_key, "not json").unwrap();

	assert!(claim_queue(&store, &settings.storage_key).is_empty());
	assert_eq!(
		store.get_item(&settings.storage_key).unwrap().as_deref(),
		Some("not json")
	);
}

#[wasm_bindgen_test]
fn test_set_toast_in_session_uses_default_key() {
	let settings = ToastSettings::default();
	let store = fresh_store(&settings.storage_key);

	set_toast_in_session(ToastMessage::new("Verified", "Your account is ready"));

	let queue = claim_queue(&store, &settings.storage_key);
	assert_eq!(queue, vec![ToastMessage::new("Verified", "Your account is ready")]);
}
