//! Error types for tamgiao-pages

use tamgiao_messages::StorageError;
use thiserror::Error;

/// Error raised while mounting a toast receiver
#[derive(Debug, Error)]
pub enum PagesError {
	/// Session storage could not be opened
	#[error(transparent)]
	Storage(#[from] StorageError),

	/// The page has no `window` object
	#[error("no global `window` to schedule toasts on")]
	NoWindow,

	/// The periodic tick could not be installed
	#[error("failed to schedule toast drain: {0}")]
	Scheduler(String),
}

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PagesError>;
