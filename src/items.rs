//! Items

use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::offers::{Offer, OfferError, execute_offer};

/// Errors raised while building or pricing an item.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The unit price was below zero.
    #[error("Price cannot be negative")]
    NegativePrice,

    /// The quantity was below zero when the item was priced.
    #[error("Quantity cannot be negative")]
    NegativeQuantity,

    /// The unit price has no decimal representation (NaN, infinite or out of range).
    #[error("Price is not a representable number")]
    InvalidPrice,

    /// Wrapped offer calculation error.
    #[error(transparent)]
    Offer(#[from] OfferError),
}

/// A basket line: some quantity of one named thing at a unit price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    name: String,
    price: Decimal,
    quantity: i64,
    offer: Offer,
}

impl Item {
    /// Creates a new item.
    ///
    /// Quantity is not checked here; a negative quantity surfaces when the item is priced.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::NegativePrice`] if `price` is below zero.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        quantity: i64,
        offer: Option<Offer>,
    ) -> Result<Self, ItemError> {
        if price < Decimal::ZERO {
            return Err(ItemError::NegativePrice);
        }

        Ok(Self {
            name: name.into(),
            price,
            quantity,
            offer: offer.unwrap_or_default(),
        })
    }

    /// Creates a new item from a floating point unit price.
    ///
    /// # Errors
    ///
    /// - [`ItemError::NegativePrice`]: the price is below zero, however small.
    /// - [`ItemError::InvalidPrice`]: the price is NaN, infinite or too large for a [`Decimal`].
    pub fn from_f64(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        offer: Option<Offer>,
    ) -> Result<Self, ItemError> {
        // Tiny negatives would round to -0 and slip past the decimal check.
        if price < 0.0 {
            return Err(ItemError::NegativePrice);
        }

        let price = Decimal::from_f64(price).ok_or(ItemError::InvalidPrice)?;

        Self::new(name, price, quantity, offer)
    }

    /// Returns the item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the quantity
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns the offer; items created without one report [`Offer::WithoutOffer`].
    pub fn offer(&self) -> Offer {
        self.offer
    }

    /// Line total after the item's offer is applied.
    ///
    /// # Errors
    ///
    /// - [`ItemError::NegativeQuantity`]: the quantity is below zero.
    /// - [`ItemError::Offer`]: the total overflowed.
    pub fn total(&self) -> Result<Decimal, ItemError> {
        self.ensure_quantity()?;

        Ok(execute_offer(self.offer, self.price, self.quantity)?)
    }

    /// Line total ignoring the item's offer.
    ///
    /// # Errors
    ///
    /// Same as [`Item::total`].
    pub fn full_price(&self) -> Result<Decimal, ItemError> {
        self.ensure_quantity()?;

        Ok(execute_offer(Offer::WithoutOffer, self.price, self.quantity)?)
    }

    /// Amount saved on this line by its offer.
    ///
    /// # Errors
    ///
    /// Same as [`Item::total`].
    pub fn savings(&self) -> Result<Decimal, ItemError> {
        Ok(self.full_price()? - self.total()?)
    }

    fn ensure_quantity(&self) -> Result<(), ItemError> {
        if self.quantity < 0 {
            Err(ItemError::NegativeQuantity)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn negative_price_is_rejected_at_construction() {
        let result = Item::new("Invalid", Decimal::from(-10), 5, Some(Offer::WithoutOffer));

        assert_eq!(result, Err(ItemError::NegativePrice));
        assert_eq!(ItemError::NegativePrice.to_string(), "Price cannot be negative");
    }

    #[test]
    fn negative_quantity_is_accepted_at_construction() -> TestResult {
        let item = Item::new("Invalid", Decimal::from(10), -5, None)?;

        assert_eq!(item.quantity(), -5);

        Ok(())
    }

    #[test]
    fn negative_quantity_fails_when_priced() -> TestResult {
        let item = Item::new("Invalid", Decimal::from(10), -5, None)?;

        assert_eq!(item.total(), Err(ItemError::NegativeQuantity));
        assert_eq!(item.full_price(), Err(ItemError::NegativeQuantity));
        assert_eq!(
            ItemError::NegativeQuantity.to_string(),
            "Quantity cannot be negative"
        );

        Ok(())
    }

    #[test]
    fn zero_price_is_valid() -> TestResult {
        let item = Item::new("Free sample", Decimal::ZERO, 1, None)?;

        assert_eq!(item.total()?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn negative_zero_price_is_valid() -> TestResult {
        let item = Item::new("Free sample", -Decimal::ZERO, 1, None)?;

        assert_eq!(item.total()?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn missing_offer_defaults_to_without_offer() -> TestResult {
        let item = Item::new("Item", Decimal::from(10), 3, None)?;
        let plain = Item::new("Item", Decimal::from(10), 3, Some(Offer::WithoutOffer))?;

        assert_eq!(item.offer(), Offer::WithoutOffer);
        assert_eq!(item.total()?, plain.total()?);
        assert_eq!(item.total()?, Decimal::from(30));

        Ok(())
    }

    #[test]
    fn accessors_return_constructor_values() -> TestResult {
        let item = Item::new("Melon", Decimal::new(50, 2), 3, Some(Offer::BuyOneGetOne))?;

        assert_eq!(item.name(), "Melon");
        assert_eq!(item.price(), Decimal::new(50, 2));
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.offer(), Offer::BuyOneGetOne);

        Ok(())
    }

    #[test]
    fn total_full_price_and_savings() -> TestResult {
        let item = Item::new("Melon", Decimal::new(50, 2), 3, Some(Offer::BuyOneGetOne))?;

        assert_eq!(item.total()?, Decimal::new(100, 2));
        assert_eq!(item.full_price()?, Decimal::new(150, 2));
        assert_eq!(item.savings()?, Decimal::new(50, 2));

        Ok(())
    }

    #[test]
    fn from_f64_builds_item() -> TestResult {
        let item = Item::from_f64("Apple", 0.5, 4, Some(Offer::ThreeForTwo))?;

        assert_eq!(item.price(), Decimal::new(5, 1));
        assert_eq!(item.total()?, Decimal::new(15, 1));

        Ok(())
    }

    #[test]
    fn from_f64_rejects_negative_price() {
        let result = Item::from_f64("Invalid", -10.0, 5, None);

        assert_eq!(result, Err(ItemError::NegativePrice));
    }

    #[test]
    fn from_f64_rejects_tiny_negative_price() {
        let result = Item::from_f64("Tiny", -1e-40, 1, None);

        assert_eq!(result, Err(ItemError::NegativePrice));
    }

    #[test]
    fn from_f64_accepts_negative_zero() -> TestResult {
        let item = Item::from_f64("Free", -0.0, 3, None)?;

        assert_eq!(item.total()?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn from_f64_rejects_out_of_range_price() {
        let result = Item::from_f64("Huge", 1e30, 1, None);

        assert_eq!(result, Err(ItemError::InvalidPrice));
    }

    #[test]
    fn invalid_price_message() {
        assert_eq!(
            ItemError::InvalidPrice.to_string(),
            "Price is not a representable number"
        );
    }

    #[test]
    fn from_f64_rejects_non_finite_price() {
        assert_eq!(
            Item::from_f64("Invalid", f64::NAN, 1, None),
            Err(ItemError::InvalidPrice)
        );
        assert_eq!(
            Item::from_f64("Invalid", f64::INFINITY, 1, None),
            Err(ItemError::InvalidPrice)
        );
    }

    #[test]
    fn overflowing_total_surfaces_offer_error() -> TestResult {
        let item = Item::new("Huge", Decimal::MAX, 2, None)?;

        assert_eq!(item.total(), Err(ItemError::Offer(OfferError::Overflow)));

        Ok(())
    }
}
