use serde::{Deserialize, Serialize};
use tracing::warn;

use super::product::{Product, ProductId};

/// One product's line in the cart, with the chosen quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub product_id: ProductId,
    #[serde(alias = "name")]
    pub title: String,
    pub price: f64,
    pub image_url: String,
    pub amount: u32,
}

impl CartEntry {
    /// Creates a fresh entry for a product with a single unit.
    pub fn from_product(product: Product) -> Self {
        Self {
            product_id: product.id,
            title: product.title,
            price: product.price,
            image_url: product.image_url,
            amount: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

/// Ordered cart contents.
///
/// Entries keep insertion order, product ids are unique and every amount is
/// at least one. The mutators below refuse to break any of these.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from persisted entries.
    ///
    /// Entries with a zero amount are dropped and only the first entry of a
    /// duplicated product id is kept.
    pub fn from_stored(stored: Vec<CartEntry>) -> Self {
        let mut cart = Self::new();
        for entry in stored {
            if entry.amount == 0 {
                warn!(product_id = entry.product_id, "Dropping stored entry with zero amount");
                continue;
            }
            if cart.contains(entry.product_id) {
                warn!(product_id = entry.product_id, "Dropping duplicated stored entry");
                continue;
            }
            cart.entries.push(entry);
        }
        cart
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.product_id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Amount of a product in the cart, zero when absent.
    pub fn amount_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map_or(0, |entry| entry.amount)
    }

    /// Sum of all amounts.
    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.amount)).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Appends an entry at the end. Returns `false` without changing anything
    /// if the product is already present or the amount is zero.
    pub fn push(&mut self, entry: CartEntry) -> bool {
        if entry.amount == 0 || self.contains(entry.product_id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Sets the amount of an existing entry. Returns `false` if the product is
    /// not in the cart or the amount is zero.
    pub fn set_amount(&mut self, product_id: ProductId, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }
        match self.entries.iter_mut().find(|entry| entry.product_id == product_id) {
            Some(entry) => {
                entry.amount = amount;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, product_id: ProductId) -> Option<CartEntry> {
        let index = self.entries.iter().position(|entry| entry.product_id == product_id)?;
        Some(self.entries.remove(index))
    }

    pub fn into_entries(self) -> Vec<CartEntry> {
        self.entries
    }
}
