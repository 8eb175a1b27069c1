use serde::{Deserialize, Serialize};

use crate::protocol::ProductRecord;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ProductId);

/// A catalog item as held by the client.
///
/// `quantity` is attached at load time and always starts at zero. Cart
/// quantities live in `client_core::cart::QuantityMap`; this field is
/// carried along but never read when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub stock: u32,
    pub thumbnail: String,
    pub rating: f64,
    pub category: String,
    pub quantity: u32,
}

impl Product {
    pub fn from_record(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            price: record.price,
            discount_percentage: record.discount_percentage,
            stock: record.stock,
            thumbnail: record.thumbnail,
            rating: record.rating,
            category: record.category,
            quantity: 0,
        }
    }
}
