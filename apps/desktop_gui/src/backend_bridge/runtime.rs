//! Backend worker: owns the tokio runtime, the catalog loader, and thumbnail fetches.

use std::{sync::Arc, thread};

use client_core::{CatalogLoader, CatalogSource, HttpCatalogSource, LoadOutcome, Settings};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::media::decode_thumbnail;

/// The catalog outcome is produced once, so it waits for queue space
/// instead of being dropped. Returns false only when the UI has gone away.
fn deliver_catalog_event(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.send(event) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("ui event queue disconnected; catalog outcome lost: {err}");
            false
        }
    }
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: Settings) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                deliver_catalog_event(&ui_tx, UiEvent::CatalogUnavailable);
                return;
            }
        };

        runtime.block_on(async move {
            let source = match HttpCatalogSource::from_settings(&settings) {
                Ok(source) => Arc::new(source),
                Err(err) => {
                    tracing::error!(url = %settings.catalog_url, "error fetching products: {err}");
                    deliver_catalog_event(&ui_tx, UiEvent::CatalogUnavailable);
                    return;
                }
            };
            let loader = CatalogLoader::new(source.clone());
            tracing::info!(url = %source.catalog_url(), "backend worker ready");

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadCatalog => match loader.load().await {
                        LoadOutcome::Loaded(products) => {
                            deliver_catalog_event(&ui_tx, UiEvent::CatalogLoaded(products));
                        }
                        LoadOutcome::Failed => {
                            deliver_catalog_event(&ui_tx, UiEvent::CatalogUnavailable);
                        }
                        LoadOutcome::AlreadyRequested => {
                            tracing::warn!("ignoring repeated catalog load request");
                        }
                    },
                    BackendCommand::FetchThumbnail { product_id, url } => {
                        let source = source.clone();
                        let ui_tx = ui_tx.clone();
                        let max_px = settings.thumbnail_max_px;
                        tokio::spawn(async move {
                            let event = match source.fetch_thumbnail(&url).await {
                                Ok(bytes) => match decode_thumbnail(&bytes, max_px) {
                                    Ok(image) => UiEvent::ThumbnailLoaded { product_id, image },
                                    Err(reason) => UiEvent::ThumbnailFailed { product_id, reason },
                                },
                                Err(err) => UiEvent::ThumbnailFailed {
                                    product_id,
                                    reason: err.to_string(),
                                },
                            };
                            if let UiEvent::ThumbnailFailed { reason, .. } = &event {
                                tracing::debug!(%product_id, "thumbnail unavailable: {reason}");
                            }
                            if let Err(err) = ui_tx.try_send(event) {
                                tracing::warn!(%product_id, "dropping thumbnail event: {err}");
                            }
                        });
                    }
                }
            }
        });
    });
}
