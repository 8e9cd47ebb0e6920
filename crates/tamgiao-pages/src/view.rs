//! HTML rendering of a toast
//!
//! Produces the markup the DOM toaster inserts into the page. It is plain
//! string rendering so SSR hosts can reuse it.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::toaster::{ToastProps, join_classes};

/// Base class of every toast container
pub const TOAST_CLASS: &str = "toast";

/// Renderable toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
	props: ToastProps,
}

impl ToastView {
	/// Wrap display parameters
	pub fn new(props: ToastProps) -> Self {
		Self { props }
	}

	/// Display parameters being rendered
	pub fn props(&self) -> &ToastProps {
		&self.props
	}

	/// CSS classes of the container
	pub fn classes(&self) -> Vec<String> {
		std::iter::once(TOAST_CLASS)
			.chain(self.props.class_name.split_whitespace())
			.map(str::to_string)
			.collect()
	}

	/// Render the toast to an HTML fragment
	///
	/// Every piece of toast text is escaped.
	///
	/// # Examples
	///
	/// ```
	/// use tamgiao_messages::{ToastMessage, ToastSettings};
	/// use tamgiao_pages::{ToastProps, ToastView};
	///
	/// let props = ToastProps::from_message(
	///     &ToastMessage::new("<b>Hi</b>", "d1"),
	///     &ToastSettings::default(),
	/// );
	/// let html = ToastView::new(props).render();
	///
	/// assert!(html.starts_with(r#"<div class="toast mb-2" role="status">"#));
	/// assert!(html.contains("&lt;b&gt;Hi&lt;/b&gt;"));
	/// assert!(!html.contains("<button"));
	/// ```
	pub fn render(&self) -> String {
		let props = &self.props;
		let mut html = format!(
			r#"<div class="{}" role="status">"#,
			encode_double_quoted_attribute(&self.classes().join(" "))
		);

		let title_class = join_classes([
			"toast-title",
			props.title.color_class.as_deref().unwrap_or_default(),
		]);
		html.push_str(&format!(
			r#"<div class="{}">{}</div>"#,
			encode_double_quoted_attribute(&title_class),
			encode_text(&props.title.text)
		));
		html.push_str(&format!(
			r#"<div class="toast-description">{}</div>"#,
			encode_text(&props.description)
		));

		if let Some(action) = &props.action {
			html.push_str(&format!(
				r#"<button type="button" class="toast-action" aria-label="{}">{}</button>"#,
				encode_double_quoted_attribute(&action.alt_text),
				encode_text(&action.label)
			));
		}

		html.push_str("</div>");
		html
	}
}

impl From<ToastProps> for ToastView {
	fn from(props: ToastProps) -> Self {
		Self::new(props)
	}
}
