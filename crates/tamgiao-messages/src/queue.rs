//! Serialized toast queue
//!
//! The queue lives under one storage key as a JSON array and is always
//! replaced wholesale. Reads validate the decoded value structurally before
//! trusting it: anything other than a list of toast objects is an empty queue.

use crate::error::{QueueReadError, Result};
use crate::message::ToastMessage;
use crate::storage::SessionStore;
use crate::{debug_log, info_log, warn_log};
use serde_json::{Map, Value};

/// Decode and validate a stored queue
///
/// Every element must be an object with string `title` and `description`;
/// `titleColor` and `className` must be strings when present and
/// `actionText` a string or `null`. One bad element rejects the whole value.
///
/// # Examples
///
/// ```
/// use tamgiao_messages::{QueueReadError, decode_queue};
///
/// let queue = decode_queue(r#"[{"title":"A","description":"d1"}]"#).unwrap();
/// assert_eq!(queue[0].title, "A");
///
/// assert!(matches!(decode_queue("{}"), Err(QueueReadError::NotAList)));
/// assert!(matches!(decode_queue("not json"), Err(QueueReadError::Malformed(_))));
/// ```
pub fn decode_queue(raw: &str) -> std::result::Result<Vec<ToastMessage>, QueueReadError> {
	let value: Value = serde_json::from_str(raw)?;
	let Value::Array(entries) = value else {
		return Err(QueueReadError::NotAList);
	};

	entries
		.into_iter()
		.enumerate()
		.map(|(index, entry)| decode_entry(index, entry))
		.collect()
}

fn decode_entry(index: usize, entry: Value) -> std::result::Result<ToastMessage, QueueReadError> {
	let invalid = |reason: String| QueueReadError::InvalidEntry { index, reason };

	let Value::Object(fields) = &entry else {
		return Err(invalid("not an object".to_string()));
	};
	check_fields(fields).map_err(invalid)?;

	serde_json::from_value(entry).map_err(|err| invalid(err.to_string()))
}

fn check_fields(fields: &Map<String, Value>) -> std::result::Result<(), String> {
	for name in ["title", "description"] {
		match fields.get(name) {
			Some(Value::String(_)) => {}
			Some(_) => return Err(format!("`{name}` must be a string")),
			None => return Err(format!("missing `{name}`")),
		}
	}
	for name in ["titleColor", "className"] {
		match fields.get(name) {
			None | Some(Value::String(_)) => {}
			Some(_) => return Err(format!("`{name}` must be a string")),
		}
	}
	match fields.get("actionText") {
		None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
		Some(_) => Err("`actionText` must be a string".to_string()),
	}
}

/// Serialize a queue to its stored form
pub fn encode_queue(queue: &[ToastMessage]) -> Result<String> {
	Ok(serde_json::to_string(queue)?)
}

/// Read the queue stored under `key`
///
/// Returns `Ok(None)` when the key is absent.
pub fn read_queue<S: SessionStore + ?Sized>(
	store: &S,
	key: &str,
) -> std::result::Result<Option<Vec<ToastMessage>>, QueueReadError> {
	match store.get_item(key)? {
		Some(raw) => decode_queue(&raw).map(Some),
		None => Ok(None),
	}
}

/// Read the queue stored under `key`, treating every failure as empty
pub fn load_queue<S: SessionStore + ?Sized>(store: &S, key: &str) -> Vec<ToastMessage> {
	match read_queue(store, key) {
		Ok(queue) => queue.unwrap_or_default(),
		Err(err) => {
			debug_log!("ignoring stored toast queue `{}`: {}", key, err);
			Vec::new()
		}
	}
}

/// Replace the queue stored under `key`
pub fn write_queue<S: SessionStore + ?Sized>(
	store: &S,
	key: &str,
	queue: &[ToastMessage],
) -> Result<()> {
	let raw = encode_queue(queue)?;
	store.set_item(key, &raw)?;
	Ok(())
}

/// Take ownership of every queued toast
///
/// A non-empty queue is removed from storage before it is returned, so a
/// reload while the toasts are being shown never replays them. Absent, empty
/// or invalid values yield an empty list and leave storage untouched. A failed
/// removal is logged; the toasts are still returned since they are already
/// claimed.
pub fn claim_queue<S: SessionStore + ?Sized>(store: &S, key: &str) -> Vec<ToastMessage> {
	let queue = load_queue(store, key);
	if queue.is_empty() {
		return queue;
	}

	if let Err(err) = store.remove_item(key) {
		warn_log!("failed to clear claimed toast queue `{}`: {}", key, err);
	}
	info_log!("claimed {} queued toast(s) from `{}`", queue.len(), key);
	queue
}
