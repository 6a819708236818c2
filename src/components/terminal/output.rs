use leptos::prelude::*;

use crate::models::{LineKind, OutputLine};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    if line.is_blank() {
        return view! { <div class=css::lineEmpty></div> }.into_any();
    }

    let class = match line.kind {
        LineKind::Echo { prompt } => {
            return view! {
                <div class=css::command>
                    <span class=format!("{} glow", css::textGreen)>{prompt}</span>
                    <span class=css::textDim>"$ "</span>
                    <span class=css::textFg>{line.text}</span>
                </div>
            }
            .into_any();
        }
        LineKind::Banner => {
            return view! { <pre class=format!("{} glow", css::ascii)>{line.text}</pre> }
                .into_any();
        }
        LineKind::Stdout => css::textFg,
        LineKind::Stderr => css::textRed,
        LineKind::Status => css::textGreen,
        LineKind::Notice => css::textYellow,
    };

    view! { <div class=format!("{} {}", css::line, class)>{line.text}</div> }.into_any()
}
