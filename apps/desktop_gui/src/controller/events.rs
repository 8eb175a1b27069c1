//! Events delivered from the backend worker to the UI thread.

use shared::domain::{Product, ProductId};

use crate::media::PreviewImage;

#[derive(Debug)]
pub enum UiEvent {
    CatalogLoaded(Vec<Product>),
    /// The catalog fetch failed; it has been logged and will not be retried.
    CatalogUnavailable,
    ThumbnailLoaded {
        product_id: ProductId,
        image: PreviewImage,
    },
    ThumbnailFailed {
        product_id: ProductId,
        reason: String,
    },
}
