//! Products

use rust_decimal::Decimal;

use crate::{
    items::{Item, ItemError},
    offers::Offer,
};

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Offer applied to every basket line of this product
    pub offer: Option<Offer>,
}

impl Product {
    /// Create a basket item for `quantity` units of this product.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::NegativePrice`] if the product price is below zero.
    pub fn item(&self, quantity: i64) -> Result<Item, ItemError> {
        Item::new(self.name.clone(), self.price, quantity, self.offer)
    }
}
