use foliosh::app::App;
use foliosh::utils::logging;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let Some(root) = document().get_element_by_id("app") else {
        tracing::error!("#app element missing, nothing to mount");
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
