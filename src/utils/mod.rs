//! Browser plumbing and small data structures.
//!
//! Provides:
//! - [`Scrollback`] - bounded terminal output buffer
//! - [`fetch`] - network fetching with timeout
//! - [`cache`] - sessionStorage cache
//! - [`format`] - date and duration formatting
//! - [`logging`] - `tracing` output to the browser console

pub mod cache;
pub mod dom;
pub mod fetch;
pub mod format;
pub mod logging;
mod scrollback;

pub use scrollback::Scrollback;
