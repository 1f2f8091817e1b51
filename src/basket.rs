//! Basket

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    items::Item,
    pricing::{TotalPriceError, subtotal_price, total_price},
};

/// Errors related to basket access or totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BasketError {
    /// An item was not found in the basket.
    #[error("Item {0} not found")]
    ItemNotFound(usize),

    /// Wrapped total price error.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),
}

/// Basket
#[derive(Debug, Clone, Default)]
pub struct Basket {
    items: Vec<Item>,
}

impl Basket {
    /// Create a new, empty basket.
    #[must_use]
    pub fn new() -> Self {
        Basket { items: Vec::new() }
    }

    /// Create a new basket with the given items.
    #[must_use]
    pub fn with_items(items: impl Into<Vec<Item>>) -> Self {
        Basket {
            items: items.into(),
        }
    }

    /// Append an item to the basket.
    ///
    /// Items are never merged, even if identical to one already present.
    pub fn add_item(&mut self, item: Item) {
        debug!(name = item.name(), quantity = item.quantity(), "added item");

        self.items.push(item);
    }

    /// Calculate the total of the basket with every item's offer applied.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError` if any item has a negative quantity or the total overflows.
    #[instrument(level = "debug", skip(self), fields(items = self.items.len()), err)]
    pub fn calculate_total(&self) -> Result<Decimal, BasketError> {
        Ok(total_price(&self.items)?)
    }

    /// Calculate the subtotal of the basket, before offers.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError` if any item has a negative quantity or the subtotal overflows.
    pub fn subtotal(&self) -> Result<Decimal, BasketError> {
        Ok(subtotal_price(&self.items)?)
    }

    /// Calculate how much the basket's offers save.
    ///
    /// # Errors
    ///
    /// Same as [`Basket::calculate_total`].
    pub fn savings(&self) -> Result<Decimal, BasketError> {
        Ok(self.subtotal()? - self.calculate_total()?)
    }

    /// Get an item from the basket.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError::ItemNotFound` if the item is not found.
    pub fn get_item(&self, item: usize) -> Result<&Item, BasketError> {
        self.items.get(item).ok_or(BasketError::ItemNotFound(item))
    }

    /// Iterate over the items in the basket.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Get the number of items in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
