//! Presentation seam
//!
//! The receiver does not render anything itself. For every drained toast it
//! builds [`ToastProps`] and hands them to a [`Toaster`], which owns rendering
//! and any failure handling of its own.

use tamgiao_messages::{ToastMessage, ToastSettings};

/// Toast title with its optional color class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastTitle {
	/// Title text
	pub text: String,
	/// Color class, `None` when the toast carries no color hint
	pub color_class: Option<String>,
}

/// Action button of a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
	/// Visible button label
	pub label: String,
	/// Accessible label announcing that the button closes the toast
	pub alt_text: String,
}

/// Visual parameters of one displayed toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastProps {
	/// Title and its color
	pub title: ToastTitle,
	/// Body text
	pub description: String,
	/// Action button, present only when the toast has an action label
	pub action: Option<ToastAction>,
	/// Container classes: the toast's own class followed by the supplemental class
	pub class_name: String,
}

impl ToastProps {
	/// Build the display parameters of a queued toast
	///
	/// # Examples
	///
	/// ```
	/// use tamgiao_messages::{ToastMessage, ToastSettings};
	/// use tamgiao_pages::ToastProps;
	///
	/// let settings = ToastSettings::default();
	///
	/// let plain = ToastProps::from_message(&ToastMessage::new("A", "d1"), &settings);
	/// assert!(plain.action.is_none());
	/// assert_eq!(plain.class_name, "mb-2");
	///
	/// let with_action = ToastProps::from_message(
	///     &ToastMessage::new("B", "d2").with_action("Close").with_class_name("border"),
	///     &settings,
	/// );
	/// assert_eq!(with_action.action.unwrap().label, "Close");
	/// assert_eq!(with_action.class_name, "border mb-2");
	/// ```
	pub fn from_message(message: &ToastMessage, settings: &ToastSettings) -> Self {
		let color_class = non_empty(&message.title_color).map(str::to_string);
		let action = message.action_text.as_ref().map(|label| ToastAction {
			label: label.clone(),
			alt_text: settings.close_label.clone(),
		});

		Self {
			title: ToastTitle {
				text: message.title.clone(),
				color_class,
			},
			description: message.description.clone(),
			action,
			class_name: join_classes([
				message.class_name.as_str(),
				settings.supplemental_class.as_str(),
			]),
		}
	}
}

fn non_empty(value: &str) -> Option<&str> {
	let trimmed = value.trim();
	(!trimmed.is_empty()).then_some(trimmed)
}

pub(crate) fn join_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
	classes
		.into_iter()
		.filter_map(non_empty)
		.collect::<Vec<_>>()
		.join(" ")
}

/// Display subsystem receiving drained toasts
///
/// Implemented for closures, so a page can pass `|props| ...` directly.
pub trait Toaster {
	/// Show one toast
	fn toast(&self, props: ToastProps);
}

impl<F> Toaster for F
where
	F: Fn(ToastProps),
{
	fn toast(&self, props: ToastProps) {
		self(props)
	}
}
