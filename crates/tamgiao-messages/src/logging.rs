//! Logging macros shared by the toast crates
//!
//! The same call sites run in the browser and on native hosts (tests, SSR), so
//! every macro picks its sink per target.
//!
//! | Macro | WASM (`debug_assertions`) | WASM (release) | Native |
//! |-------|---------------------------|----------------|--------|
//! | `debug_log!` | `console.debug` | no-op | `tracing::debug!` |
//! | `info_log!` | `console.info` | no-op | `tracing::info!` |
//! | `warn_log!` | `console.warn` | no-op | `tracing::warn!` |
//! | `error_log!` | `console.error` | no-op | `tracing::error!` |
//!
//! Native events are filtered by whatever `tracing` subscriber the host installs.
//!
//! ## Example
//!
//! ```ignore
//! use tamgiao_messages::{debug_log, warn_log};
//!
//! debug_log!("claimed {} queued toasts", queue.len());
//! warn_log!("dropping toast: {}", err);
//! ```

/// Logs a debug message
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::debug!($($arg)*);
	}};
}

/// No-op debug_log in wasm release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::info!($($arg)*);
	}};
}

/// No-op info_log in wasm release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning
///
/// Used for recoverable failures such as a dropped toast or a stored queue that
/// could not be cleared.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::warn!($($arg)*);
	}};
}

/// No-op warn_log in wasm release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::error!($($arg)*);
	}};
}

/// No-op error_log in wasm release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}
