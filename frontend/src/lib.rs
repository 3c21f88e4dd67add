pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod pages;
pub mod query;
pub mod utils;

#[cfg(all(test, target_arch = "wasm32"))]
mod test_dom;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = config::Config::from_env();
    logging::init(config.log_level);
    log::info!("starting frontend against {}", config.api_base);

    leptos::mount_to_body(app::App);
}
