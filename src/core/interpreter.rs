//! Shell session and the `execute` entry point.

use std::any::Any;
use std::collections::VecDeque;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::config::{HOME_PATH, MAX_COMMAND_HISTORY};
use crate::core::commands::{Command, CommandResult, Context, execute_command};
use crate::core::error::ShellError;
use crate::core::source::ContentSource;
use crate::core::{VirtualFs, parser, path};

// =============================================================================
// Command History
// =============================================================================

/// Recorded command lines with a recall cursor.
///
/// The cursor lives in `[0, len]`; `len` means "past the newest entry".
#[derive(Clone, Debug)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    cursor: usize,
    capacity: usize,
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Append a line and move the cursor past the end.
    pub fn record(&mut self, line: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line.into());
        self.cursor = self.entries.len();
    }

    /// Step back to the previous entry; `None` at the oldest.
    pub fn prev(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward to the next entry; `None` past the newest.
    pub fn next(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(MAX_COMMAND_HISTORY)
    }
}

// =============================================================================
// Session
// =============================================================================

/// Mutable per-visitor state.
#[derive(Clone, Debug)]
pub struct Session {
    /// Always an existing directory.
    pub current_path: String,
    pub history: CommandHistory,
}

impl Session {
    /// Start in the home directory, or at the root if home is missing.
    pub fn new(fs: &VirtualFs) -> Self {
        let current_path = if fs.is_directory(HOME_PATH) {
            HOME_PATH.to_string()
        } else {
            "/".to_string()
        };
        Self {
            current_path,
            history: CommandHistory::default(),
        }
    }
}

// =============================================================================
// Interpreter
// =============================================================================

/// Runs command lines against one filesystem for one session.
#[derive(Clone, Debug)]
pub struct Interpreter {
    fs: VirtualFs,
    session: Session,
}

impl Interpreter {
    pub fn new(fs: VirtualFs) -> Self {
        let session = Session::new(&fs);
        Self { fs, session }
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn current_path(&self) -> &str {
        &self.session.current_path
    }

    /// Current path for prompts, with home shown as `~`.
    pub fn display_path(&self) -> String {
        path::display(&self.session.current_path)
    }

    pub fn history(&self) -> &CommandHistory {
        &self.session.history
    }

    pub fn history_prev(&mut self) -> Option<String> {
        self.session.history.prev().map(str::to_string)
    }

    pub fn history_next(&mut self) -> Option<String> {
        self.session.history.next().map(str::to_string)
    }

    /// Run one command line.
    ///
    /// Never fails: every problem becomes an output line, optionally
    /// tagged through `CommandResult::error`.
    pub async fn execute<S: ContentSource>(&mut self, line: &str, source: &S) -> CommandResult {
        if line.trim().is_empty() {
            return CommandResult::empty();
        }
        self.session.history.record(line);

        let words = parser::tokenize(line);
        let Some((name, args)) = words.split_first() else {
            return CommandResult::empty();
        };

        let cmd = match Command::parse(name, args) {
            Ok(cmd) => cmd,
            Err(err) => {
                tracing::debug!(%err, "command rejected");
                return CommandResult::failure(&err);
            }
        };
        tracing::debug!(command = cmd.name(), ?args, "dispatching");

        let name = cmd.name();
        let ctx = Context::new(&self.fs, &self.session.current_path);
        let outcome = AssertUnwindSafe(execute_command(cmd, ctx, source))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(mut output)) => {
                if let Some(dir) = output.change_dir.take() {
                    self.session.current_path = dir;
                }
                output.into()
            }
            Ok(Err(err)) => CommandResult::failure(&err),
            Err(payload) => {
                let err = ShellError::Internal {
                    cmd: name,
                    message: panic_message(payload.as_ref()),
                };
                tracing::error!(%err, "command panicked");
                CommandResult::failure(&err)
            }
        }
    }
}

/// Text of a panic payload, when it carries one.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unexpected failure".to_string()
    }
}
