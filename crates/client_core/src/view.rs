//! Read-only card view derived from the catalog sequence and the cart quantities.

use std::fmt::Write as _;

use shared::domain::{Product, ProductId};

use crate::cart::QuantityMap;

pub const ADD_TO_CART_LABEL: &str = "Add to Cart";
pub const ADDED_TO_CART_LABEL: &str = "Added to Cart";
pub const BULK_LABEL: &str = "Bulk";
pub const DELETE_LABEL: &str = "Delete";
pub const LIKE_GLYPH: &str = "♡";

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub thumbnail: String,
    pub price_label: String,
    pub rating_label: String,
    pub cart_button_label: &'static str,
    pub show_stepper: bool,
    pub show_delete: bool,
    pub quantity: u32,
}

pub fn price_label(price: f64) -> String {
    format!("₹{price:.2}/-")
}

pub fn rating_label(rating: f64) -> String {
    format!("★ {rating}")
}

pub fn cart_button_label(quantity: u32) -> &'static str {
    if quantity > 0 {
        ADDED_TO_CART_LABEL
    } else {
        ADD_TO_CART_LABEL
    }
}

pub fn render_card(product: &Product, quantities: &QuantityMap) -> ProductCard {
    let quantity = quantities.quantity(product.id);
    let in_cart = quantity > 0;
    ProductCard {
        id: product.id,
        title: product.title.clone(),
        category: product.category.clone(),
        thumbnail: product.thumbnail.clone(),
        price_label: price_label(product.price),
        rating_label: rating_label(product.rating),
        cart_button_label: cart_button_label(quantity),
        show_stepper: in_cart,
        show_delete: in_cart,
        quantity,
    }
}

/// One card per listed product, in catalog order.
pub fn render_cards(products: &[Product], quantities: &QuantityMap) -> Vec<ProductCard> {
    products
        .iter()
        .map(|product| render_card(product, quantities))
        .collect()
}

pub fn render_text(cards: &[ProductCard]) -> String {
    let mut out = String::new();
    for card in cards {
        let _ = writeln!(out, "[{}] {} {}", card.id, card.title, LIKE_GLYPH);
        let _ = writeln!(out, "    {}", card.rating_label);
        if !card.category.is_empty() {
            let _ = writeln!(out, "    {}", card.category);
        }
        let _ = writeln!(out, "    {}", card.price_label);
        let _ = writeln!(out, "    ( {BULK_LABEL} ) ( {} )", card.cart_button_label);
        if card.show_stepper {
            let _ = writeln!(out, "    ( - ) {} ( + )", card.quantity);
        }
        if card.show_delete {
            let _ = writeln!(out, "    ( {DELETE_LABEL} )");
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
