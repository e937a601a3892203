// A.S. Agri Exports landing page, browser entry (Leptos 0.8 CSR)

use agri_site::App;
use agri_site::types::SiteContent;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    match SiteContent::builtin() {
        Ok(content) => leptos::mount::mount_to_body(move || view! { <App content=content /> }),
        Err(err) => web_sys::console::error_1(&JsValue::from_str(&format!(
            "agri-landing: embedded content is invalid: {err}"
        ))),
    }
}
