//! Toast receiver and presentation adapters
//!
//! This module provides access to tamgiao-pages: the receiver that drains the
//! queue after a navigation, the `Toaster` presentation seam, HTML rendering
//! and the tokio / `setInterval` drain drivers.

pub use tamgiao_pages::*;
