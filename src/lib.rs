/// Settings Lists - word and website list core for the extension options page
/// Built with Rust + WASM

mod bindings;
pub mod favicon;
pub mod operations;
pub mod record;
pub mod record_list;
pub mod settings;
pub mod url_helper;

use wasm_bindgen::prelude::*;

pub use bindings::SettingsList;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export URL helpers for JavaScript access
#[wasm_bindgen]
pub fn is_url(url: &str) -> bool {
    url_helper::is_url(url)
}

#[wasm_bindgen]
pub fn has_valid_protocol(url: &str) -> bool {
    url_helper::has_valid_protocol(url)
}

#[wasm_bindgen]
pub fn strip_url(url: &str) -> String {
    url_helper::strip_url(url).to_string()
}

#[wasm_bindgen]
pub fn get_hostname(url: &str) -> String {
    url_helper::get_hostname(url)
}

#[wasm_bindgen]
pub fn get_favicon_link(url: &str) -> String {
    url_helper::get_favicon_link(url)
}

#[wasm_bindgen]
pub fn get_valid_url(url: &str) -> String {
    url_helper::get_valid_url(url)
}

// Resolves to a boolean, never rejects
#[wasm_bindgen]
pub async fn check_favicon_link(favicon_link: String) -> bool {
    url_helper::check_favicon_link(&favicon_link).await
}
