//! Scrollback line and screen state types.

use std::sync::atomic::{AtomicU64, Ordering};

/// Where a scrollback line came from; decides how it is colored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// A submitted line, echoed after the prompt it was typed at.
    Echo { prompt: String },
    /// Regular command output.
    Stdout,
    /// Diagnostics printed by a command.
    Stderr,
    /// Boot and reload progress that completed.
    Status,
    /// Hints and notices from the terminal itself.
    Notice,
    /// The ASCII banner.
    Banner,
}

/// One line of scrollback. `id` keys the line in the rendered list.
#[derive(Clone, Debug)]
pub struct OutputLine {
    pub id: u64,
    pub kind: LineKind,
    pub text: String,
}

static NEXT_LINE_ID: AtomicU64 = AtomicU64::new(0);

impl OutputLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            id: NEXT_LINE_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            text: text.into(),
        }
    }

    pub fn echo(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(
            LineKind::Echo {
                prompt: prompt.into(),
            },
            input,
        )
    }

    pub fn stdout(text: impl Into<String>) -> Self {
        Self::new(LineKind::Stdout, text)
    }

    pub fn stderr(text: impl Into<String>) -> Self {
        Self::new(LineKind::Stderr, text)
    }

    pub fn status(text: impl Into<String>) -> Self {
        Self::new(LineKind::Status, text)
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self::new(LineKind::Notice, text)
    }

    pub fn banner(text: impl Into<String>) -> Self {
        Self::new(LineKind::Banner, text)
    }

    pub fn blank() -> Self {
        Self::stdout("")
    }

    /// One line of a command result.
    pub fn from_result(text: &str, is_diagnostic: bool) -> Self {
        if is_diagnostic {
            Self::stderr(text)
        } else {
            Self::stdout(text)
        }
    }

    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Stdout && self.text.is_empty()
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

/// What the screen is doing right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenMode {
    Booting,
    Terminal,
    /// A command or reload is running.
    Busy,
    /// The session was ended with `exit`.
    Halted,
}

impl ScreenMode {
    /// The prompt is only shown while idle.
    pub fn accepts_input(self) -> bool {
        self == Self::Terminal
    }

    /// A blinking cursor stands in for the prompt while work is running.
    pub fn shows_cursor(self) -> bool {
        self == Self::Busy
    }
}
