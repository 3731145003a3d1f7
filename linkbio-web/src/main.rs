mod api;
mod app;
mod components;
mod config;
mod logger;
mod pages;

use app::App;
use config::FrontendConfig;
use yew::Renderer;

fn main() {
    let config = FrontendConfig::new();
    if let Err(error) = logger::init(config.log_level_filter()) {
        web_sys::console::warn_1(&format!("Console logger not installed: {error}").into());
    }
    logger::install_panic_hook();

    log::info!("Starting linkbio profile page");

    // Mounts onto <body>
    Renderer::<App>::new().render();
}
