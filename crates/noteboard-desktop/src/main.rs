//! NoteBoard Desktop Application
//!
//! A single window for jotting notes with an optional file and image.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod config;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "noteboard=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting NoteBoard...");

    let app_config = config::load_config();
    tracing::debug!(?app_config, "Configuration loaded");
    config::install(app_config);

    let window = WindowBuilder::new()
        .with_title("NoteBoard")
        .with_inner_size(LogicalSize::new(520.0, 760.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
