//! Prices

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::items::{Item, ItemError};

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TotalPriceError {
    /// Wrapped item pricing error.
    #[error(transparent)]
    Item(#[from] ItemError),

    /// The running total could not be represented as a decimal.
    #[error("total price overflowed")]
    Overflow,
}

/// Calculates the total price of a list of items, applying each item's offer.
///
/// An empty list totals zero. Items are priced in order and the first failure is returned.
///
/// # Errors
///
/// - [`TotalPriceError::Item`]: an item could not be priced (e.g. negative quantity).
/// - [`TotalPriceError::Overflow`]: the sum fell outside the decimal range.
pub fn total_price(items: &[Item]) -> Result<Decimal, TotalPriceError> {
    sum_lines(items, Item::total)
}

/// Calculates the total price of a list of items ignoring any offers.
///
/// # Errors
///
/// Same as [`total_price`].
pub fn subtotal_price(items: &[Item]) -> Result<Decimal, TotalPriceError> {
    sum_lines(items, Item::full_price)
}

fn sum_lines(
    items: &[Item],
    line: impl Fn(&Item) -> Result<Decimal, ItemError>,
) -> Result<Decimal, TotalPriceError> {
    items
        .iter()
        .enumerate()
        .try_fold(Decimal::ZERO, |acc, (idx, item)| {
            let amount = line(item)?;

            debug!(
                item_idx = idx,
                name = item.name(),
                quantity = item.quantity(),
                offer = %item.offer(),
                %amount,
                "priced line"
            );

            acc.checked_add(amount).ok_or(TotalPriceError::Overflow)
        })
}
