//! Client-side core of the storefront: catalog loading, cart quantities, and card derivation.

pub mod cart;
pub mod config;
pub mod error;
pub mod loader;
pub mod source;
pub mod view;

pub use cart::{CartAction, QuantityMap, Storefront};
pub use config::{load_settings, Settings};
pub use error::CatalogError;
pub use loader::{CatalogLoader, LoadOutcome};
pub use source::{CatalogSource, HttpCatalogSource};
pub use view::{render_cards, render_text, ProductCard};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
