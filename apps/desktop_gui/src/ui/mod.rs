//! UI layer for the storefront window: app shell, product cards, and theme.

pub mod app;
pub mod card;
pub mod theme;

pub use app::StorefrontApp;
