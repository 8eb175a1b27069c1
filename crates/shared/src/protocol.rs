use serde::{Deserialize, Serialize};

use crate::{domain::ProductId, error::ProtocolError};

/// One entry of the remote `products` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub stock: u32,
    pub thumbnail: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub category: String,
}

/// Body returned by the catalog endpoint. Paging fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub products: Vec<ProductRecord>,
}

impl CatalogResponse {
    pub fn from_json(bytes: &[u8]) -> Result<Self, ProtocolError> {
        serde_json::from_slice(bytes).map_err(ProtocolError::from)
    }
}
