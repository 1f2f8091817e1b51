//! Trolley
//!
//! Trolley prices shopping baskets. Each item carries a unit price, a quantity and an
//! optional offer such as buy one get one free or three for two; the basket total is
//! the sum of every item's offer-adjusted line total.

pub mod basket;
pub mod fixtures;
pub mod items;
pub mod offers;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod utils;
