//! BotDeck - Remote Bot Control Panel
//!
//! A Rust desktop application for starting/stopping a remote bot device
//! over its REST API and viewing a usage chart.

mod api;
mod charts;
mod config;
mod gui;

use anyhow::Context;
use eframe::egui;
use gui::BotDeckApp;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // .env overrides must land before the config is read
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("botdeck=info")),
        )
        .init();

    let config = config::Config::from_env().context("invalid configuration")?;
    tracing::info!(
        api_base = %config.api_base,
        device_id = config.device_id,
        "starting BotDeck"
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([800.0, 520.0])
            .with_title("BotDeck"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "BotDeck",
        options,
        Box::new(move |cc| Ok(Box::new(BotDeckApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
