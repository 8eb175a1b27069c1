//! One product card: thumbnail, details, cart buttons, stepper, and delete control.

use client_core::{
    view::{BULK_LABEL, DELETE_LABEL, LIKE_GLYPH},
    CartAction, ProductCard,
};

use crate::controller::reducer::ThumbnailState;
use crate::ui::theme::CardPalette;

const THUMBNAIL_HEIGHT: f32 = 150.0;

pub fn show_product_card(
    ui: &mut egui::Ui,
    card: &ProductCard,
    thumbnail: Option<&mut ThumbnailState>,
    width: f32,
    palette: CardPalette,
) -> Option<CartAction> {
    let mut action = None;

    egui::Frame::group(ui.style())
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.vertical(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.label(egui::RichText::new(LIKE_GLYPH).size(18.0).color(palette.muted));
                });

                show_thumbnail(ui, card, thumbnail, width);

                ui.label(egui::RichText::new(&card.rating_label).strong());
                ui.label(egui::RichText::new(&card.title).strong().size(15.0));
                if !card.category.is_empty() {
                    ui.label(egui::RichText::new(&card.category).color(palette.muted));
                }
                ui.label(
                    egui::RichText::new(&card.price_label)
                        .color(palette.price)
                        .size(15.0),
                );
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    if ui.button(BULK_LABEL).clicked() {
                        action = Some(CartAction::Bulk(card.id));
                    }
                    let cart_button = egui::Button::new(
                        egui::RichText::new(card.cart_button_label).color(palette.accent_text),
                    )
                    .fill(palette.accent);
                    if ui.add(cart_button).clicked() {
                        action = Some(CartAction::AddToCart(card.id));
                    }
                });

                if card.show_stepper {
                    ui.horizontal(|ui| {
                        if ui.button("-").clicked() {
                            action = Some(CartAction::Decrease(card.id));
                        }
                        ui.label(egui::RichText::new(card.quantity.to_string()).strong());
                        if ui.button("+").clicked() {
                            action = Some(CartAction::Increase(card.id));
                        }
                    });
                }

                if card.show_delete {
                    let delete_button = egui::Button::new(
                        egui::RichText::new(format!("🗑 {DELETE_LABEL}")).color(egui::Color32::WHITE),
                    )
                    .fill(palette.danger);
                    if ui.add(delete_button).clicked() {
                        action = Some(CartAction::Delete(card.id));
                    }
                }
            });
        });

    action
}

fn show_thumbnail(
    ui: &mut egui::Ui,
    card: &ProductCard,
    thumbnail: Option<&mut ThumbnailState>,
    width: f32,
) {
    let slot = egui::vec2(width, THUMBNAIL_HEIGHT);
    match thumbnail {
        Some(ThumbnailState::Ready { image, texture }) => {
            let handle = texture.get_or_insert_with(|| {
                let color_image =
                    egui::ColorImage::from_rgba_unmultiplied([image.width, image.height], &image.rgba);
                ui.ctx().load_texture(
                    format!("product_thumbnail_{}", card.id),
                    color_image,
                    egui::TextureOptions::LINEAR,
                )
            });
            let size = fit_within(
                egui::vec2(image.width as f32, image.height as f32),
                slot,
            );
            ui.vertical_centered(|ui| {
                ui.add(egui::Image::new((handle.id(), size)));
            });
        }
        Some(ThumbnailState::Loading) => {
            ui.allocate_ui(slot, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            });
        }
        Some(ThumbnailState::Failed) | None => {
            ui.allocate_ui(slot, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.weak(&card.title);
                });
            });
        }
    }
}

/// Scales `size` to fit inside `bounds`, keeping aspect ratio and never enlarging.
pub fn fit_within(size: egui::Vec2, bounds: egui::Vec2) -> egui::Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let scale = (bounds.x / size.x).min(bounds.y / size.y).min(1.0);
    size * scale
}
