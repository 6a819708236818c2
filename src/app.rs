//! Root application module.
//!
//! Contains the main App component, AppContext definition and TerminalState.

use leptos::prelude::*;

use crate::components::terminal::Shell;
use crate::config::{HOST_NAME, MAX_TERMINAL_HISTORY, USER_NAME};
use crate::core::{GithubClient, Interpreter};
use crate::models::{OutputLine, ScreenMode};
use crate::utils::Scrollback;

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal state managed with Leptos signals.
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Terminal output (bounded by `MAX_TERMINAL_HISTORY`).
    pub output: RwSignal<Scrollback<OutputLine>>,
    /// Current directory as shown in the prompt (`~` for home).
    pub cwd: RwSignal<String>,
    pub screen_mode: RwSignal<ScreenMode>,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            output: RwSignal::new(Scrollback::new(MAX_TERMINAL_HISTORY)),
            cwd: RwSignal::new("~".to_string()),
            screen_mode: RwSignal::new(ScreenMode::Booting),
        }
    }

    pub fn push_output(&self, line: OutputLine) {
        self.output.update(|o| o.push(line));
    }

    pub fn push_lines(&self, lines: Vec<OutputLine>) {
        self.output.update(|o| o.extend(lines));
    }

    pub fn clear_output(&self) {
        self.output.update(|o| o.clear());
    }

    /// Format: `{user}@{host}:{path}`
    pub fn prompt(&self) -> String {
        self.cwd
            .with(|cwd| format!("{}@{}:{}", USER_NAME, HOST_NAME, cwd))
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context, provided at the root.
///
/// The interpreter is moved out of `shell` while a command runs, which is
/// what keeps commands strictly one at a time.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub terminal: TerminalState,

    /// `None` before boot and while a command is executing.
    pub shell: RwSignal<Option<Interpreter>>,

    pub github: GithubClient,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            terminal: TerminalState::new(),
            shell: RwSignal::new(None),
            github: GithubClient::new(),
        }
    }

    /// Install an interpreter and sync the prompt with it.
    pub fn set_shell(&self, shell: Interpreter) {
        self.terminal.cwd.set(shell.display_path());
        self.shell.set(Some(shell));
    }

    /// Take the interpreter for the duration of one command.
    pub fn take_shell(&self) -> Option<Interpreter> {
        self.shell.try_update(Option::take).flatten()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates and provides the global AppContext, wraps the shell in an
/// ErrorBoundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #000;
                    color: #00ff41;
                    font-family: 'Courier New', monospace;
                ">
                    <h1 style="color: #ff5555; margin-bottom: 1rem;">"KERNEL PANIC"</h1>
                    <ul style="margin: 0 0 2rem 0; color: #ff5555;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: transparent;
                            color: #00ff41;
                            border: 1px solid #00ff41;
                            padding: 0.75rem 2rem;
                            cursor: pointer;
                            font-family: 'Courier New', monospace;
                        "
                    >
                        "Reboot"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
