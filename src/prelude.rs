//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError},
    fixtures::{Fixture, FixtureError},
    items::{Item, ItemError},
    offers::{Offer, OfferError, execute_offer},
    pricing::{TotalPriceError, subtotal_price, total_price},
    products::Product,
    receipt::{Receipt, ReceiptError, ReceiptLine},
};
