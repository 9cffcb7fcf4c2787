//! Todo UI Entry Point

mod app;
mod components;
mod context;
mod logger;
mod settings;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = settings::load();
    logger::init(config.level_filter());
    if let Some(err) = config_error {
        log::warn!("[CONFIG] Ignoring page config: {}", err);
    }
    log::info!("[CONFIG] Using todo API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
