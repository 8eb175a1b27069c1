use std::collections::HashMap;

use shared::domain::{Product, ProductId};

/// Cart quantity per product, keyed by id. Entries never go below zero and
/// stay present at zero until their product is deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantityMap {
    entries: HashMap<ProductId, u32>,
}

impl QuantityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ProductId) -> Option<u32> {
        self.entries.get(&id).copied()
    }

    /// Quantity for `id`, treating a missing entry as zero.
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.get(id).unwrap_or(0)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.entries.iter().map(|(id, qty)| (*id, *qty))
    }

    /// Puts the product in the cart at 1 when absent or at zero; a positive quantity is kept.
    fn add(&mut self, id: ProductId) -> u32 {
        let qty = self.entries.entry(id).or_insert(0);
        if *qty == 0 {
            *qty = 1;
        }
        *qty
    }

    fn increase(&mut self, id: ProductId) -> u32 {
        let qty = self.entries.entry(id).or_insert(0);
        *qty = qty.saturating_add(1);
        *qty
    }

    fn decrease(&mut self, id: ProductId) -> u32 {
        let qty = self.entries.entry(id).or_insert(0);
        *qty = qty.saturating_sub(1);
        *qty
    }

    fn remove(&mut self, id: ProductId) -> Option<u32> {
        self.entries.remove(&id)
    }
}

/// A user action on one product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    AddToCart(ProductId),
    Bulk(ProductId),
    Increase(ProductId),
    Decrease(ProductId),
    Delete(ProductId),
}

impl CartAction {
    pub fn product_id(self) -> ProductId {
        match self {
            Self::AddToCart(id)
            | Self::Bulk(id)
            | Self::Increase(id)
            | Self::Decrease(id)
            | Self::Delete(id) => id,
        }
    }
}

/// The catalog sequence and the cart quantities, held side by side and
/// joined only by product id.
///
/// Every cart operation ignores ids that are not in the current catalog
/// sequence, so nothing can be added before the catalog loads or after a
/// product has been deleted.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    products: Vec<Product>,
    quantities: QuantityMap,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn quantities(&self) -> &QuantityMap {
        &self.quantities
    }

    pub fn is_listed(&self, id: ProductId) -> bool {
        self.products.iter().any(|product| product.id == id)
    }

    /// Publishes a freshly loaded catalog, replacing whatever was listed.
    pub fn replace_catalog(&mut self, products: Vec<Product>) {
        tracing::debug!(count = products.len(), "catalog sequence replaced");
        self.products = products;
    }

    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddToCart(id) => self.add_to_cart(id),
            CartAction::Bulk(id) => self.bulk_add(id),
            CartAction::Increase(id) => self.increase_quantity(id),
            CartAction::Decrease(id) => self.decrease_quantity(id),
            CartAction::Delete(id) => {
                self.delete_product(id);
            }
        }
    }

    /// Sets quantity to 1 unless the product is already in the cart with a positive quantity.
    pub fn add_to_cart(&mut self, id: ProductId) {
        if !self.is_listed(id) {
            return;
        }
        let quantity = self.quantities.add(id);
        tracing::debug!(product_id = %id, quantity, "add to cart");
    }

    /// The bulk button shares the add-to-cart effect.
    pub fn bulk_add(&mut self, id: ProductId) {
        self.add_to_cart(id);
    }

    pub fn increase_quantity(&mut self, id: ProductId) {
        if !self.is_listed(id) {
            return;
        }
        let quantity = self.quantities.increase(id);
        tracing::debug!(product_id = %id, quantity, "increase quantity");
    }

    pub fn decrease_quantity(&mut self, id: ProductId) {
        if !self.is_listed(id) {
            return;
        }
        let quantity = self.quantities.decrease(id);
        tracing::debug!(product_id = %id, quantity, "decrease quantity");
    }

    /// Removes the product from the catalog sequence and drops its cart entry.
    pub fn delete_product(&mut self, id: ProductId) -> Option<Product> {
        let position = self.products.iter().position(|product| product.id == id)?;
        let removed = self.products.remove(position);
        self.quantities.remove(id);
        tracing::debug!(product_id = %id, "product deleted");
        Some(removed)
    }
}

#[cfg(test)]
#[path = "tests/cart_tests.rs"]
mod tests;
