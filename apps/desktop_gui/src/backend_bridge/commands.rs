//! Backend commands queued from UI to backend worker.

use shared::domain::ProductId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// Issued once, when the storefront view first activates.
    LoadCatalog,
    FetchThumbnail {
        product_id: ProductId,
        url: String,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadCatalog => "load_catalog",
            BackendCommand::FetchThumbnail { .. } => "fetch_thumbnail",
        }
    }
}
