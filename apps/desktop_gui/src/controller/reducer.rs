//! State transitions for the storefront view, kept free of egui drawing.

use std::collections::HashMap;

use client_core::{CartAction, Storefront};
use crossbeam_channel::Sender;
use shared::domain::ProductId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::media::PreviewImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    Inactive,
    Loading,
    Ready,
    /// Load failed. Rendered exactly like an empty catalog.
    Unavailable,
}

pub enum ThumbnailState {
    Loading,
    Ready {
        image: PreviewImage,
        texture: Option<egui::TextureHandle>,
    },
    Failed,
}

pub struct ShopState {
    pub storefront: Storefront,
    pub phase: CatalogPhase,
    pub thumbnails: HashMap<ProductId, ThumbnailState>,
}

impl Default for ShopState {
    fn default() -> Self {
        Self {
            storefront: Storefront::new(),
            phase: CatalogPhase::Inactive,
            thumbnails: HashMap::new(),
        }
    }
}

impl ShopState {
    /// First activation of the view. Yields the catalog request exactly once.
    pub fn activate(&mut self) -> Option<BackendCommand> {
        if self.phase != CatalogPhase::Inactive {
            return None;
        }
        self.phase = CatalogPhase::Loading;
        Some(BackendCommand::LoadCatalog)
    }

    /// Folds one backend event into the state and returns follow-up commands.
    pub fn apply_event(&mut self, event: UiEvent) -> Vec<BackendCommand> {
        match event {
            UiEvent::CatalogLoaded(products) => {
                self.phase = CatalogPhase::Ready;
                self.thumbnails.clear();
                let mut followups = Vec::with_capacity(products.len());
                for product in &products {
                    if product.thumbnail.trim().is_empty() {
                        continue;
                    }
                    followups.push(BackendCommand::FetchThumbnail {
                        product_id: product.id,
                        url: product.thumbnail.clone(),
                    });
                }
                self.storefront.replace_catalog(products);
                followups
            }
            UiEvent::CatalogUnavailable => {
                self.phase = CatalogPhase::Unavailable;
                Vec::new()
            }
            UiEvent::ThumbnailLoaded { product_id, image } => {
                if self.storefront.is_listed(product_id) {
                    self.thumbnails.insert(
                        product_id,
                        ThumbnailState::Ready {
                            image,
                            texture: None,
                        },
                    );
                }
                Vec::new()
            }
            UiEvent::ThumbnailFailed { product_id, .. } => {
                if self.storefront.is_listed(product_id) {
                    self.thumbnails.insert(product_id, ThumbnailState::Failed);
                }
                Vec::new()
            }
        }
    }

    /// Queues each command and records the outcome, so nothing is left
    /// waiting on a command the backend never received.
    pub fn dispatch_all(&mut self, cmd_tx: &Sender<BackendCommand>, cmds: Vec<BackendCommand>) {
        for cmd in cmds {
            let (load_catalog, thumbnail_for) = match &cmd {
                BackendCommand::LoadCatalog => (true, None),
                BackendCommand::FetchThumbnail { product_id, .. } => (false, Some(*product_id)),
            };
            let accepted = dispatch_backend_command(cmd_tx, cmd);

            if let Some(product_id) = thumbnail_for {
                let state = if accepted {
                    ThumbnailState::Loading
                } else {
                    ThumbnailState::Failed
                };
                self.thumbnails.insert(product_id, state);
            } else if load_catalog && !accepted {
                self.phase = CatalogPhase::Unavailable;
            }
        }
    }

    pub fn apply_action(&mut self, action: CartAction) {
        self.storefront.apply(action);
        if let CartAction::Delete(id) = action {
            self.thumbnails.remove(&id);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == CatalogPhase::Loading
    }
}
