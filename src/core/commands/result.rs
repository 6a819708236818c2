//! Command execution result types.

use crate::core::error::{ErrorKind, ShellError};

/// Request a command makes of the hosting UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellAction {
    /// Wipe the visible output.
    Clear,
    /// Rebuild the filesystem from the remote listing.
    Reload,
    /// End the session and stop accepting input.
    Exit,
}

/// What a handler produced on success.
///
/// Handlers may interleave diagnostics with regular output (e.g. `ls` with
/// one missing operand among several), so each line remembers its stream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandOutput {
    lines: Vec<String>,
    diagnostics: Vec<usize>,
    /// New current directory requested by `cd`.
    pub change_dir: Option<String>,
    pub action: Option<ShellAction>,
}

impl CommandOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn action(action: ShellAction) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }

    pub fn change_dir(path: String) -> Self {
        Self {
            change_dir: Some(path),
            ..Self::default()
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Append a diagnostic line.
    pub fn diagnostic(&mut self, err: &ShellError) {
        self.diagnostics.push(self.lines.len());
        self.lines.push(err.to_string());
    }

    pub fn text(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Result of executing one command line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandResult {
    /// Output lines, diagnostics included, in print order.
    pub output: Vec<String>,
    /// Set when the command as a whole failed (unknown name, bad usage or
    /// an internal fault).
    pub error: Option<ErrorKind>,
    pub action: Option<ShellAction>,
    /// Indices into `output` of lines that are diagnostics.
    diagnostics: Vec<usize>,
}

impl CommandResult {
    /// Create an empty result (no output, no action).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Result of a handler that failed as a whole.
    ///
    /// Multi-line messages (usage hints) are split into output lines.
    pub fn failure(err: &ShellError) -> Self {
        let kind = err.kind();
        let output: Vec<String> = err.to_string().lines().map(str::to_string).collect();
        Self {
            diagnostics: (0..output.len()).collect(),
            output,
            error: kind.tags_result().then_some(kind),
            action: None,
        }
    }

    pub fn is_diagnostic(&self, index: usize) -> bool {
        self.diagnostics.contains(&index)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<CommandOutput> for CommandResult {
    fn from(output: CommandOutput) -> Self {
        Self {
            output: output.lines,
            error: None,
            action: output.action,
            diagnostics: output.diagnostics,
        }
    }
}
