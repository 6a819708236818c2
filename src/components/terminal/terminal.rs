//! Terminal view component.
//!
//! The terminal interface with output history and command input.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::boot;
use super::hooks::HistoryStep;
use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::core::{AutocompleteResult, CommandResult, ShellAction, autocomplete, get_hint};
use crate::models::{OutputLine, ScreenMode};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

/// Turn a command result into scrollback lines, diagnostics in red.
fn render_result(result: &CommandResult) -> Vec<OutputLine> {
    result
        .output
        .iter()
        .enumerate()
        .map(|(i, line)| OutputLine::from_result(line, result.is_diagnostic(i)))
        .collect()
}

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let prompt = Signal::derive(move || ctx.terminal.prompt());

    let on_submit = create_submit_callback(ctx);
    let on_interrupt = create_interrupt_callback(ctx);
    let on_clear = create_clear_callback(ctx);
    let on_history_nav = create_history_nav_callback(ctx);
    let on_autocomplete = create_autocomplete_callback(ctx);
    let on_get_hint = create_hint_callback(ctx);

    let handle_click = move |_| dom::focus_terminal_input();
    let output_signal = ctx.terminal.output;

    view! {
        <div class=css::container on:click=handle_click>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || output_signal.get().to_vec()
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>

            <Show
                when=move || ctx.terminal.screen_mode.get().accepts_input()
                fallback=move || {
                    ctx.terminal
                        .screen_mode
                        .get()
                        .shows_cursor()
                        .then(|| view! { <div class=css::busy>"_"</div> })
                }
            >
                <div class=css::inputArea>
                    <Input
                        prompt=prompt
                        on_submit=on_submit
                        on_interrupt=on_interrupt
                        on_clear=on_clear
                        on_history_nav=on_history_nav
                        on_autocomplete=on_autocomplete
                        on_get_hint=on_get_hint
                    />
                </div>
            </Show>
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| {
        ctx.terminal
            .push_output(OutputLine::echo(ctx.terminal.prompt(), &input));

        // Taking the interpreter out is what serializes commands
        let Some(mut shell) = ctx.take_shell() else {
            tracing::warn!("command submitted while another is running");
            return;
        };
        ctx.terminal.screen_mode.set(ScreenMode::Busy);

        spawn_local(async move {
            let result = shell.execute(&input, &ctx.github).await;

            match result.action {
                Some(ShellAction::Clear) => ctx.terminal.clear_output(),
                _ => ctx.terminal.push_lines(render_result(&result)),
            }

            match result.action {
                Some(ShellAction::Reload) => {
                    // The old interpreter is dropped with its history
                    boot::reload(ctx);
                }
                Some(ShellAction::Exit) => {
                    ctx.set_shell(shell);
                    ctx.terminal
                        .push_output(OutputLine::notice("[Process completed]"));
                    ctx.terminal.screen_mode.set(ScreenMode::Halted);
                }
                Some(ShellAction::Clear) | None => {
                    ctx.set_shell(shell);
                    ctx.terminal.screen_mode.set(ScreenMode::Terminal);
                }
            }
        });
    })
}

/// Echo the abandoned line with `^C`, like a real terminal.
fn create_interrupt_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| {
        ctx.terminal.push_output(OutputLine::echo(
            ctx.terminal.prompt(),
            format!("{}^C", input),
        ));
    })
}

fn create_clear_callback(ctx: AppContext) -> Callback<()> {
    Callback::new(move |_| ctx.terminal.clear_output())
}

fn create_history_nav_callback(ctx: AppContext) -> Callback<HistoryStep, Option<String>> {
    Callback::new(move |step: HistoryStep| {
        ctx.shell
            .try_update_untracked(|shell| {
                let shell = shell.as_mut()?;
                match step {
                    HistoryStep::Prev => shell.history_prev(),
                    HistoryStep::Next => shell.history_next(),
                }
            })
            .flatten()
    })
}

fn create_autocomplete_callback(ctx: AppContext) -> Callback<String, AutocompleteResult> {
    Callback::new(move |input: String| {
        ctx.shell.with_untracked(|shell| match shell {
            Some(shell) => autocomplete(&input, shell.current_path(), shell.fs()),
            None => AutocompleteResult::None,
        })
    })
}

fn create_hint_callback(ctx: AppContext) -> Callback<String, Option<String>> {
    Callback::new(move |input: String| {
        ctx.shell.with_untracked(|shell| {
            shell
                .as_ref()
                .and_then(|shell| get_hint(&input, shell.current_path(), shell.fs()))
        })
    })
}
