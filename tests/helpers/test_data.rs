// Test Data Factory
//
// Dates, carts and engines shared by the pricing tests.

use std::sync::Arc;

use actix_web::web;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use shopping::pricing::{
    LineItem, PricingEngine, PricingRules, ReferenceClock, ShoppingState,
};

/// Tolerance for comparing totals built from chains of fractional multipliers
pub fn tolerance() -> Decimal {
    Decimal::new(1, 9)
}

pub fn assert_total_eq(actual: Decimal, expected: Decimal) {
    assert!(
        (actual - expected).abs() < tolerance(),
        "expected total {}, got {}",
        expected,
        actual
    );
}

/// A day outside every default sale window
pub fn off_season_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// A day inside the default summer sale
pub fn summer_sale_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// A day inside the default winter sale
pub fn winter_sale_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
}

pub fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

pub fn default_engine() -> PricingEngine {
    PricingEngine::new(Arc::new(PricingRules::default()))
}

pub fn engine_with(rules: PricingRules) -> PricingEngine {
    PricingEngine::new(Arc::new(rules))
}

pub fn cart(items: &[(&str, i32)]) -> Vec<LineItem> {
    items
        .iter()
        .map(|(product, quantity)| LineItem::new(*product, *quantity))
        .collect()
}

/// Shopping state with "today" pinned to `date`
pub fn shopping_state(date: NaiveDate) -> web::Data<ShoppingState> {
    web::Data::new(ShoppingState::new(
        default_engine(),
        ReferenceClock::Fixed(date),
    ))
}

/// Factory for request payloads in the public wire format
pub struct TestDataFactory;

impl TestDataFactory {
    pub fn cart_payload(customer_type: &str, items: &[(&str, i32)]) -> Value {
        let items: Vec<Value> = items
            .iter()
            .map(|(product, quantity)| json!({ "type": product, "nb": quantity }))
            .collect();

        json!({ "type": customer_type, "items": items })
    }

    pub fn payload_without_items(customer_type: &str) -> Value {
        json!({ "type": customer_type })
    }
}
