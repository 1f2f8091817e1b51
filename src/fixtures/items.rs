//! Item Fixtures

use serde::Deserialize;

/// Wrapper for items in YAML
#[derive(Debug, Deserialize)]
pub struct ItemsFixture {
    /// Basket lines, in the order they are added
    pub items: Vec<ItemFixture>,
}

/// A basket line referencing a product by key
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Product key in the products fixture
    pub product: String,

    /// Number of units
    pub quantity: i64,
}
