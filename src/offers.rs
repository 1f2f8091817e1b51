//! Offers
//!
//! Per-item discount rules applied to a unit price and quantity.

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors specific to offer calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OfferError {
    /// The line total could not be represented as a decimal.
    #[error("offer total overflowed")]
    Overflow,
}

/// A promotional offer attached to an item.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Offer {
    /// Every unit is charged at full price.
    #[default]
    WithoutOffer,

    /// Buy one, get one free.
    ///
    /// Every second unit of a pair is free; an odd unit out is charged in full.
    BuyOneGetOne,

    /// Three for the price of two.
    ///
    /// Every complete group of three is charged as two; leftovers are charged in full.
    ThreeForTwo,
}

impl Offer {
    /// Number of units the customer pays for under this offer.
    pub fn payable_units(self, quantity: i64) -> i64 {
        match self {
            Offer::WithoutOffer => quantity,
            // Ceiling division that holds for negative quantities too.
            Offer::BuyOneGetOne => quantity.div_euclid(2) + quantity.rem_euclid(2),
            Offer::ThreeForTwo => (quantity / 3) * 2 + quantity % 3,
        }
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offer::WithoutOffer => f.write_str("No offer"),
            Offer::BuyOneGetOne => f.write_str("Buy one get one free"),
            Offer::ThreeForTwo => f.write_str("3 for 2"),
        }
    }
}

/// Calculates the line total for `quantity` units at `price` under `offer`.
///
/// # Errors
///
/// Returns [`OfferError::Overflow`] if the total falls outside the decimal range.
pub fn execute_offer(offer: Offer, price: Decimal, quantity: i64) -> Result<Decimal, OfferError> {
    let units = Decimal::from(offer.payable_units(quantity));

    price.checked_mul(units).ok_or(OfferError::Overflow)
}
