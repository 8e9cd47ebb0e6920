//! Toast descriptor

use serde::{Deserialize, Serialize};

/// A notification queued for display after the next navigation
///
/// The serialized form is the schema shared by every producer and the
/// receiver: `title`, `description`, `actionText`, `titleColor`, `className`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastMessage {
	/// Headline shown to the user
	pub title: String,
	/// Body text
	pub description: String,
	/// Label of the action button; `None` renders no button
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub action_text: Option<String>,
	/// Style class applied to the title, empty for none
	#[serde(default)]
	pub title_color: String,
	/// Style class applied to the toast container, empty for none
	#[serde(default)]
	pub class_name: String,
}

impl ToastMessage {
	/// Create a toast with a title and a description
	///
	/// # Examples
	///
	/// ```
	/// use tamgiao_messages::ToastMessage;
	///
	/// let toast = ToastMessage::new("Verified", "Your account is ready");
	/// assert_eq!(toast.title, "Verified");
	/// assert!(toast.action_text.is_none());
	/// assert!(toast.title_color.is_empty());
	/// ```
	pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
			action_text: None,
			title_color: String::new(),
			class_name: String::new(),
		}
	}

	/// Add an action button with the given label
	pub fn with_action(mut self, label: impl Into<String>) -> Self {
		self.action_text = Some(label.into());
		self
	}

	/// Set the style class of the title
	///
	/// # Examples
	///
	/// ```
	/// use tamgiao_messages::ToastMessage;
	///
	/// let toast = ToastMessage::new("Invalid code", "Please try again")
	///     .with_title_color("text-red-600");
	/// assert_eq!(toast.title_color, "text-red-600");
	/// ```
	pub fn with_title_color(mut self, class: impl Into<String>) -> Self {
		self.title_color = class.into();
		self
	}

	/// Set the style class of the container
	pub fn with_class_name(mut self, class: impl Into<String>) -> Self {
		self.class_name = class.into();
		self
	}

	/// Whether an action button should be rendered
	pub fn has_action(&self) -> bool {
		self.action_text.is_some()
	}
}
