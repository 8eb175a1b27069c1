use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use client_core::{render_cards, CartAction};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, reducer::ShopState};
use crate::ui::card::show_product_card;
use crate::ui::theme::{
    card_palette, visuals_for_theme, PersistedDesktopSettings, ThemePreset, SETTINGS_STORAGE_KEY,
};

pub struct StorefrontApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    shop: ShopState,

    theme: ThemePreset,
    applied_theme: Option<ThemePreset>,
    card_width: f32,
}

impl StorefrontApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        persisted_settings: Option<PersistedDesktopSettings>,
    ) -> Self {
        let settings = persisted_settings.unwrap_or_default().sanitized();
        Self {
            cmd_tx,
            ui_rx,
            shop: ShopState::default(),
            theme: settings.theme,
            applied_theme: None,
            card_width: settings.card_width,
        }
    }

    fn activate_once(&mut self) {
        if let Some(cmd) = self.shop.activate() {
            self.shop.dispatch_all(&self.cmd_tx, vec![cmd]);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            let followups = self.shop.apply_event(event);
            self.shop.dispatch_all(&self.cmd_tx, followups);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        ctx.set_visuals(visuals_for_theme(self.theme));
        self.applied_theme = Some(self.theme);
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("storefront_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Products");
                if self.shop.is_loading() {
                    ui.spinner();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let toggle_label = format!("{} theme", self.theme.toggled().label());
                    if ui.button(toggle_label).clicked() {
                        self.theme = self.theme.toggled();
                    }
                });
            });
        });
    }

    fn show_product_grid(&mut self, ctx: &egui::Context) {
        let palette = card_palette(self.theme);
        let cards = render_cards(
            self.shop.storefront.products(),
            self.shop.storefront.quantities(),
        );
        let card_width = self.card_width;
        let mut pending: Option<CartAction> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(14.0, 14.0);
                        for card in &cards {
                            let thumbnail = self.shop.thumbnails.get_mut(&card.id);
                            if let Some(action) =
                                show_product_card(ui, card, thumbnail, card_width, palette)
                            {
                                pending = Some(action);
                            }
                        }
                    });
                });
        });

        if let Some(action) = pending {
            self.shop.apply_action(action);
        }
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.activate_once();
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        self.show_top_bar(ctx);
        self.show_product_grid(ctx);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedDesktopSettings {
            theme: self.theme,
            card_width: self.card_width,
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
