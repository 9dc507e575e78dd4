//! Wishlist Console Entry Point

mod actions;
mod api;
mod app;
mod coerce;
mod components;
mod config;
mod context;
mod dispatch;
mod models;
mod store;

use app::App;
use config::ConsoleConfig;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    let config = ConsoleConfig::from_build_env();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::error_1(&JsValue::from_str(&format!("logger already set: {}", err)));
    }
    log::info!("wishlist console starting, api base {:?}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
