//! Greeting for whoever opens the browser console.

use crate::config::{PRODUCT_NAME, TAGLINE, VERSION};
use leptos::prelude::*;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn banner() -> String {
    format!(
        r#"
  __  __            _             _____               _
 |  \/  | ___ _ __ | |_ ___  _ __|_   _| __ __ _  ___| | __
 | |\/| |/ _ \ '_ \| __/ _ \| '__|| || '__/ _` |/ __| |/ /
 | |  | |  __/ | | | || (_) | |   | || | | (_| | (__|   <
 |_|  |_|\___|_| |_|\__\___/|_|   |_||_|  \__,_|\___|_|\_\

  {TAGLINE}
  {PRODUCT_NAME} {VERSION}
"#
    )
}

#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner() -> impl IntoView {
    // Runs once, when the app is created in the browser
    #[cfg(target_arch = "wasm32")]
    print_banner();

    view! {}
}

#[cfg(target_arch = "wasm32")]
fn print_banner() {
    use wasm_bindgen::JsValue;

    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", banner())),
        &JsValue::from_str("color: #6c5ce7; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cMentoring a class? Tell us how it goes: hello@mentortrack.app"),
        &JsValue::from_str("color: #00b894;"),
    );
}
