mod api;
mod app;
mod application;
mod config;
mod domain;
mod ui;
mod utils;

use iced::window;
use tracing::{info, warn};

use crate::config::Settings;

fn main() -> iced::Result {
    dotenvy::dotenv().ok();

    let (settings, config_error) = match Settings::new() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_level.as_str())
        .init();

    if let Some(e) = config_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }
    info!(backend = %settings.backend_url, "Starting Clip Downloader...");

    iced::application(
        move || app::DownloadApp::new(&settings),
        app::update,
        app::view,
    )
    .title("Clip Downloader")
    .window(window::Settings {
        size: iced::Size::new(560.0, 420.0),
        ..Default::default()
    })
    .run()
}
