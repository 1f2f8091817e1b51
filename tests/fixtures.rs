//! Integration tests for the fixture sets shipped in `./fixtures`.
//!
//! `groceries`: apples and bananas at full price, melons on buy one get one free and
//! limes on three for two.
//!
//! - Apple: 2 x 0.35 = 0.70
//! - Banana: 3 x 0.20 = 0.60
//! - Melon: 3 x 0.50, pay for 2 = 1.00 (saves 0.50)
//! - Lime: 4 x 0.15, pay for 3 = 0.45 (saves 0.15)
//!
//! Subtotal 3.40, total 2.75, savings 0.65.

use rust_decimal::Decimal;
use testresult::TestResult;

use trolley::prelude::*;

#[test]
fn groceries_fixture_prices_to_expected_total() -> TestResult {
    let fixture = Fixture::from_set("groceries")?;
    let basket = fixture.basket(None)?;

    assert_eq!(basket.len(), 4);
    assert_eq!(basket.subtotal()?, Decimal::new(340, 2));
    assert_eq!(basket.calculate_total()?, Decimal::new(275, 2));
    assert_eq!(basket.savings()?, Decimal::new(65, 2));

    Ok(())
}

#[test]
fn groceries_fixture_receipt_matches_basket() -> TestResult {
    let fixture = Fixture::from_set("groceries")?;
    let basket = fixture.basket(None)?;
    let receipt = Receipt::from_basket(&basket)?;

    assert_eq!(receipt.total(), basket.calculate_total()?);
    assert_eq!(receipt.subtotal(), basket.subtotal()?);

    let names: Vec<&str> = receipt
        .lines()
        .iter()
        .map(|line| line.name.as_str())
        .collect();

    assert_eq!(names, ["Apple", "Banana", "Melon", "Lime"]);

    Ok(())
}

#[test]
fn offers_fixture_mixes_all_offer_types() -> TestResult {
    let fixture = Fixture::from_set("offers")?;
    let basket = fixture.basket(None)?;

    let offers: Vec<Offer> = basket.iter().map(Item::offer).collect();

    assert_eq!(
        offers,
        [Offer::ThreeForTwo, Offer::BuyOneGetOne, Offer::WithoutOffer]
    );
    assert_eq!(basket.calculate_total()?, Decimal::new(3350, 2));

    Ok(())
}

#[test]
fn offers_fixture_first_two_items() -> TestResult {
    let fixture = Fixture::from_set("offers")?;
    let basket = fixture.basket(Some(2))?;

    assert_eq!(basket.calculate_total()?, Decimal::new(350, 2));

    Ok(())
}
