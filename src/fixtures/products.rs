//! Product Fixtures

use std::str::FromStr;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{fixtures::FixtureError, items::ItemError, offers::Offer, products::Product};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product key -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Unit price (e.g., "0.35")
    pub price: String,

    /// Optional offer (e.g., `buy-one-get-one`)
    #[serde(default)]
    pub offer: Option<Offer>,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.price)?;

        if price < Decimal::ZERO {
            return Err(ItemError::NegativePrice.into());
        }

        Ok(Product {
            name: fixture.name,
            price,
            offer: fixture.offer,
        })
    }
}

/// Parse a price string (e.g., "0.35") into a decimal
///
/// # Errors
///
/// Returns an error if the string is not a decimal number.
pub fn parse_price(s: &str) -> Result<Decimal, FixtureError> {
    Decimal::from_str(s.trim()).map_err(|_err| FixtureError::InvalidPrice(s.to_string()))
}
