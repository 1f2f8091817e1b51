//! Global subscriber installation.
//!
//! `init_tracing` sets a process-wide subscriber, so it is exercised in its own test
//! binary with a single test; nothing else here can install one first.

use rust_decimal::Decimal;
use testresult::TestResult;
use trolley::{
    prelude::*,
    utils::{LogFormat, TracingError, init_tracing},
};

#[test]
fn init_tracing_installs_once() -> TestResult {
    init_tracing("debug", LogFormat::Compact)?;

    let basket = Basket::with_items([Item::new(
        "Melon",
        Decimal::new(50, 2),
        3,
        Some(Offer::BuyOneGetOne),
    )?]);

    assert_eq!(basket.calculate_total()?, Decimal::ONE);

    let second = init_tracing("debug", LogFormat::Json);

    assert!(
        matches!(second, Err(TracingError::Init(_))),
        "second subscriber was installed"
    );

    Ok(())
}
