mod app;
mod config;
mod dom;
mod generate;
mod preview;

use gloo::console;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    match boot() {
        Ok(()) => console::log!("imagelab controller attached"),
        Err(err) => console::error!("imagelab boot failed", dom::js_err(&err)),
    }
}

fn boot() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("missing document"))?;
    let _app = app::FormApp::mount(&document)?;
    Ok(())
}
