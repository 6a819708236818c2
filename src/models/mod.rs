//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Node`], [`NodeKind`] - Virtual filesystem entries
//! - [`Repository`], [`TreeEntry`], [`RepositoryListing`] - GitHub metadata feeding the tree builder
//! - [`OutputLine`], [`ScreenMode`] - Terminal rendering

mod filesystem;
mod terminal;

pub use filesystem::{
    Node, NodeKind, Permissions, Repository, RepositoryListing, TreeEntry, TreeEntryKind,
};
pub use terminal::{LineKind, OutputLine, ScreenMode};
