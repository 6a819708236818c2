//! Prompt line: editing keys, Tab completion and ghost hints.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use super::hooks::{HistoryStep, KeyAction, TabCycle, accept_hint, complete_line};
use crate::core::AutocompleteResult;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// The prompt and its input field.
///
/// History, completion and hints are answered by the callbacks, which read
/// the interpreter's state; this component only edits the line.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    on_submit: Callback<String>,
    on_interrupt: Callback<String>,
    on_clear: Callback<()>,
    on_history_nav: Callback<HistoryStep, Option<String>>,
    on_autocomplete: Callback<String, AutocompleteResult>,
    on_get_hint: Callback<String, Option<String>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let line = RwSignal::new(String::new());
    let cycle = RwSignal::new(TabCycle::default());
    let hint = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(el) = input_ref.get() {
            let _ = el.focus();
        }
    });

    let cursor = move || {
        input_ref
            .get()
            .and_then(|el| el.selection_start().ok().flatten())
            .map_or(0, |pos| pos as usize)
    };

    // Replace the whole line and park the cursor after it
    let replace_line = move |value: String| {
        let end = value.len() as u32;
        line.set(value);
        if let Some(el) = input_ref.get() {
            let _ = el.set_selection_range(end, end);
        }
    };

    let forget_transient = move || {
        cycle.set(TabCycle::default());
        hint.set(None);
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let action = KeyAction::from_key(&ev.key(), ev.ctrl_key());
        if action.overrides_browser() {
            ev.prevent_default();
        }

        match action {
            KeyAction::Complete => {
                let current = line.get_untracked();
                let completed = cycle
                    .try_update(|cycle| {
                        complete_line(&current, cycle, |text| on_autocomplete.run(text.to_string()))
                    })
                    .flatten();
                if let Some(completed) = completed {
                    hint.set(None);
                    replace_line(completed);
                }
            }
            KeyAction::Submit => {
                forget_transient();
                on_submit.run(line.get_untracked());
                line.set(String::new());
            }
            KeyAction::History(step) => {
                forget_transient();
                match (on_history_nav.run(step), step) {
                    (Some(recalled), _) => replace_line(recalled),
                    (None, HistoryStep::Next) => line.set(String::new()),
                    (None, HistoryStep::Prev) => {}
                }
            }
            KeyAction::AcceptHint => {
                let current = line.get_untracked();
                let accepted = hint.with_untracked(|h| accept_hint(&current, cursor(), h.as_deref()));
                if let Some(accepted) = accepted {
                    ev.prevent_default();
                    hint.set(None);
                    replace_line(accepted);
                }
            }
            KeyAction::Interrupt => {
                forget_transient();
                on_interrupt.run(line.get_untracked());
                line.set(String::new());
            }
            KeyAction::ClearScreen => {
                forget_transient();
                on_clear.run(());
            }
            KeyAction::Dismiss => forget_transient(),
            KeyAction::Edit => cycle.set(TabCycle::default()),
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let value = target.unchecked_into::<web_sys::HtmlInputElement>().value();
        cycle.set(TabCycle::default());
        hint.set((!value.is_empty()).then(|| on_get_hint.run(value.clone())).flatten());
        line.set(value);
    };

    let candidates_view = move || {
        cycle.with(|cycle| {
            cycle.is_active().then(|| {
                let selected = cycle.selected();
                let items = cycle
                    .candidates()
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let class = if selected == Some(i) {
                            format!("{} {}", css::suggestion, css::suggestionActive)
                        } else {
                            css::suggestion.to_string()
                        };
                        view! { <span class=class>{name.clone()}</span> }
                    })
                    .collect_view();
                view! { <div class=css::suggestions>{items}</div> }
            })
        })
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>"$ "</span>
                <div class=css::field>
                    <div class=css::ghostOverlay>
                        <span class=css::ghostText>{move || line.get()}</span>
                        <span class=css::ghostHint>{move || hint.get().unwrap_or_default()}</span>
                    </div>
                    <input
                        node_ref=input_ref
                        type="text"
                        class=css::input
                        autocomplete="off"
                        spellcheck="false"
                        prop:value=move || line.get()
                        on:input=handle_input
                        on:keydown=handle_keydown
                    />
                </div>
            </div>
            {candidates_view}
        </div>
    }
}
