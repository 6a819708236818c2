//! Browser access used by the terminal and the listing cache.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, Storage};

/// sessionStorage, when the page is allowed to use it.
pub fn session_storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok()?
}

/// Put the caret back in the prompt; a no-op while the prompt is hidden.
pub fn focus_terminal_input() {
    let prompt = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("input[type=text]").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if let Some(prompt) = prompt {
        let _ = prompt.focus();
    }
}

pub fn scroll_to_bottom(element: &HtmlElement) {
    element.set_scroll_top(element.scroll_height());
}

/// Browser clock as Unix seconds.
pub fn now_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}
