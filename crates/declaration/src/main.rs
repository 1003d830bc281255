//! Declaration: a desktop signature board for the petition

use eframe::egui;
use eyre::{eyre, Result};

use declaration_board_adapters::AdapterConfig;

mod app;
mod board_bridge;
mod narrative;
mod ui;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        git_hash = env!("GIT_HASH"),
        "Starting Declaration"
    );

    let config = AdapterConfig::from_env();
    let bridge = board_bridge::BoardBridge::new(&config)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Declaration")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Declaration",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, bridge)))),
    )
    .map_err(|e| eyre!("failed to run the window: {e}"))
}
