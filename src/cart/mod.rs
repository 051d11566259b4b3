//! In-memory cart state for a single client session.
//!
//! The store is plain owned data: one `CartStore` per session, mutated only
//! through `&mut self` methods on the session's own task. Persistence is the
//! caller's job; `update_from_db` hydrates the store from whatever the
//! backing cart API returned.

use serde::{Deserialize, Serialize};

/// One product-variant line in the cart. `pv_id` (product + color + size)
/// is the merge identity: the store never holds two entries with the same
/// `pv_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub discounted_price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    pub pv_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Replace the whole collection with a server snapshot. Last write wins;
    /// no merging against local state.
    pub fn update_from_db(&mut self, items: Vec<CartItem>) {
        self.items = items;
    }

    /// Add an item, merging by `pv_id`. On merge the existing entry keeps
    /// every field it already had (price and metadata are not refreshed);
    /// only the quantity grows by the incoming quantity. A new `pv_id` is
    /// appended, so iteration order is insertion order.
    pub fn add_to_cart(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|i| i.pv_id == item.pv_id) {
            Some(existing) => existing.quantity += item.quantity,
            None => self.items.push(item),
        }
    }

    /// Remove the entry with this `pv_id`. Removing an absent variant is a
    /// no-op, not an error.
    pub fn remove_from_cart(&mut self, pv_id: i64) {
        self.items.retain(|i| i.pv_id != pv_id);
    }

    /// Overwrite the quantity for one entry. The value is taken as-is: no
    /// positivity check and no clamping. Callers guard before calling.
    pub fn update_quantity(&mut self, pv_id: i64, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.pv_id == pv_id) {
            item.quantity = quantity;
        }
    }

    pub fn clear_cart(&mut self) {
        self.items.clear();
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Cart total over the non-discounted unit price. The storefront has
    /// always summed `price`, not `discounted_price`; callers that want the
    /// discounted rule use `total_discounted_price`.
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.price * f64::from(i.quantity))
            .sum()
    }

    /// Cart total over `discounted_price`, for callers that want the
    /// discount applied.
    pub fn total_discounted_price(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.discounted_price * f64::from(i.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests;
