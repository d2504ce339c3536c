//! Entry point for the WASM application

use leptos::*;
use robotech_frontend::{App, LOG_LEVEL};

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🤖 Robotech - Starting Leptos App");

    if let Err(e) = robotech::validate(&robotech::site_content()) {
        log::error!("❌ Page content is inconsistent: {}", e);
    }

    mount_to_body(|| view! { <App/> })
}
