// Seasonal window boundaries and their effect on cart totals

#[path = "../helpers/mod.rs"]
mod helpers;

use chrono::{Datelike, NaiveDate};
use helpers::*;
use proptest::prelude::*;
use rust_decimal_macros::dec;
use shopping::pricing::{PricingRules, SeasonalDiscountCalendar, SeasonalWindow};

/// Sale strictly between June 6th and June 14th
fn narrow_summer_rules() -> PricingRules {
    PricingRules {
        calendar: SeasonalDiscountCalendar::new(vec![SeasonalWindow::new("Summer period", 6, 6, 14)]),
        ..PricingRules::default()
    }
}

#[test]
fn test_exclusive_bounds_are_not_discounted() {
    let engine = engine_with(narrow_summer_rules());
    let items = cart(&[("DRESS", 1), ("JACKET", 1), ("TSHIRT", 1)]);
    let price = |date| {
        engine
            .compute_total("STANDARD_CUSTOMER", Some(items.as_slice()), date)
            .unwrap()
    };

    // 50 + 100 + 30
    assert_total_eq(price(june(6)), dec!(180));
    assert_total_eq(price(june(14)), dec!(180));
    // 40 + 90 + 30
    assert_total_eq(price(june(10)), dec!(160));
}

#[test]
fn test_default_summer_covers_sixth_to_fourteenth() {
    let calendar = SeasonalDiscountCalendar::default();

    assert!(!calendar.is_discount_active(june(5)));
    for day in 6..=14 {
        assert!(calendar.is_discount_active(june(day)), "June {day} should be on sale");
    }
    assert!(!calendar.is_discount_active(june(15)));
}

#[test]
fn test_default_winter_window() {
    let calendar = SeasonalDiscountCalendar::default();
    let january = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();

    assert!(!calendar.is_discount_active(january(5)));
    assert!(calendar.is_discount_active(january(6)));
    assert!(calendar.is_discount_active(january(14)));
    assert!(!calendar.is_discount_active(january(15)));
}

#[test]
fn test_tshirt_price_ignores_the_season() {
    let engine = default_engine();
    let items = cart(&[("TSHIRT", 2)]);

    assert_eq!(
        engine.compute_total("PREMIUM_CUSTOMER", Some(items.as_slice()), summer_sale_date()),
        engine.compute_total("PREMIUM_CUSTOMER", Some(items.as_slice()), off_season_date())
    );
}

proptest! {
    /// Property: outside January and June the default calendar never discounts
    #[test]
    fn test_no_sale_outside_sale_months(
        month in prop::sample::select(vec![2u32, 3, 4, 5, 7, 8, 9, 10, 11, 12]),
        day in 1u32..=28,
    ) {
        let date = NaiveDate::from_ymd_opt(2024, month, day).unwrap();
        prop_assert!(!SeasonalDiscountCalendar::default().is_discount_active(date));
    }

    /// Property: a window is open exactly on the days strictly between its bounds
    #[test]
    fn test_window_matches_strict_inequalities(
        month in 1u32..=12,
        start in 0u32..28,
        length in 1u32..10,
        day in 1u32..=28,
    ) {
        let window = SeasonalWindow::new("Sale", month, start, start + length);
        let date = NaiveDate::from_ymd_opt(2024, month, day).unwrap();

        prop_assert_eq!(window.contains(date), day > start && day < start + length);
        prop_assert_eq!(date.month(), month);
    }

    /// Property: adding a window never closes a sale day
    #[test]
    fn test_extra_windows_only_add_sale_days(
        month in 1u32..=12,
        day in 1u32..=28,
        extra_month in 1u32..=12,
        extra_start in 0u32..20,
    ) {
        let date = NaiveDate::from_ymd_opt(2024, month, day).unwrap();
        let base = SeasonalDiscountCalendar::default();

        let mut windows = base.windows().to_vec();
        windows.push(SeasonalWindow::new("Flash sale", extra_month, extra_start, extra_start + 5));
        let extended = SeasonalDiscountCalendar::new(windows);

        if base.is_discount_active(date) {
            prop_assert!(extended.is_discount_active(date));
        }
    }
}
