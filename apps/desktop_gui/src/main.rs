mod backend_bridge;
mod controller;
mod media;
mod ui;

use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{
    theme::{PersistedDesktopSettings, SETTINGS_STORAGE_KEY},
    StorefrontApp,
};

const APP_TITLE: &str = "Storefront";

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured catalog endpoint.
    #[arg(long)]
    catalog_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.catalog_url {
        settings.catalog_url = url;
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1180.0, 800.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            let persisted_settings = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| PersistedDesktopSettings::from_storage_text(&text))
            });
            Ok(Box::new(StorefrontApp::new(
                cmd_tx,
                ui_rx,
                persisted_settings,
            )))
        }),
    )
}
