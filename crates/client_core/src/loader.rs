use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use shared::domain::Product;

use crate::source::CatalogSource;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The fetched catalog, each record carrying a zero `quantity`.
    Loaded(Vec<Product>),
    /// The fetch failed and was logged; the caller keeps its empty catalog.
    Failed,
    /// A fetch was already issued by this loader; nothing was requested.
    AlreadyRequested,
}

/// Issues at most one catalog request for its whole lifetime.
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    requested: AtomicBool,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            requested: AtomicBool::new(false),
        }
    }

    pub fn has_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }

    pub async fn load(&self) -> LoadOutcome {
        if self.requested.swap(true, Ordering::AcqRel) {
            tracing::debug!("catalog already requested; skipping");
            return LoadOutcome::AlreadyRequested;
        }

        match self.source.fetch_catalog().await {
            Ok(response) => {
                let products: Vec<Product> = response
                    .products
                    .into_iter()
                    .map(Product::from_record)
                    .collect();
                tracing::info!(count = products.len(), "product catalog loaded");
                LoadOutcome::Loaded(products)
            }
            Err(err) => {
                tracing::error!(transport = err.is_transport(), "error fetching products: {err}");
                LoadOutcome::Failed
            }
        }
    }
}
