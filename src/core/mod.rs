//! Core business logic for the terminal application.
//!
//! This module provides:
//! - [`Interpreter`] holding the session and running command lines
//! - [`Command`] parsing and [`CommandResult`] output
//! - [`VirtualFs`] virtual filesystem and [`build_file_system`]
//! - [`autocomplete`] and [`get_hint`] for tab completion
//! - [`GithubClient`] for repositories and on-demand file content
//!
//! Nothing here except [`GithubClient`] touches browser APIs, so the whole
//! shell runs under native tests.

mod autocomplete;
mod builder;
mod commands;
pub mod error;
mod filesystem;
mod github;
mod interpreter;
pub mod parser;
pub mod path;
pub mod profile;
mod source;

pub use autocomplete::{AutocompleteResult, autocomplete, get_hint};
pub use builder::{build_basic_file_system, build_file_system};
pub use commands::{Command, CommandOutput, CommandResult, ShellAction};
pub use filesystem::VirtualFs;
pub use github::GithubClient;
pub use interpreter::{CommandHistory, Interpreter, Session};
pub use source::{ContentSource, NoContentSource};
