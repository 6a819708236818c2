//! Main shell component.
//!
//! Screen container: CRT effects, boot trigger and autoscroll.

use leptos::prelude::*;

use super::boot;
use super::terminal::Terminal;
use crate::app::AppContext;
use crate::models::OutputLine;
use crate::utils::{Scrollback, dom};

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

/// Auto-scroll output to bottom when it changes.
fn setup_autoscroll_effect(
    output: RwSignal<Scrollback<OutputLine>>,
    output_ref: NodeRef<leptos::html::Div>,
) {
    Effect::new(move || {
        output.track();
        if let Some(el) = output_ref.get() {
            dom::scroll_to_bottom(&el);
        }
    });
}

/// Shell component hosting the terminal.
///
/// Runs the boot sequence once on mount.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let output_ref = NodeRef::<leptos::html::Div>::new();

    let boot_started = StoredValue::new(false);
    Effect::new(move || {
        if !boot_started.get_value() {
            boot_started.set_value(true);
            boot::run(ctx);
        }
    });

    setup_autoscroll_effect(ctx.terminal.output, output_ref);

    view! {
        <div class=css::screen>
            <div class=css::crtOverlay></div>
            <div class=css::scanline></div>

            <div class=css::main>
                <Terminal output_ref=output_ref />
            </div>
        </div>
    }
}
