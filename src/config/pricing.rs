use chrono::NaiveDate;
use chrono_tz::Tz;
use std::env;

use crate::core::timezone::{self, DEFAULT_PRICING_TIMEZONE};
use crate::core::{AppError, Result};
use crate::modules::pricing::{PricingRules, ReferenceClock, UnknownProductPolicy};

/// Pricing configuration
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Zone the seasonal calendar is read in
    pub timezone: Tz,
    pub unknown_product_policy: UnknownProductPolicy,
    /// Pins "today" for every request, e.g. on staging
    pub reference_date: Option<NaiveDate>,
    pub rules: PricingRules,
}

impl PricingConfig {
    pub fn from_env() -> Result<Self> {
        let timezone = timezone::parse_timezone(
            &env::var("PRICING_TIMEZONE").unwrap_or_else(|_| DEFAULT_PRICING_TIMEZONE.to_string()),
        )?;

        let unknown_product_policy = env::var("PRICING_UNKNOWN_PRODUCT_POLICY")
            .unwrap_or_else(|_| "ignore".to_string())
            .parse()
            .map_err(AppError::Configuration)?;

        let reference_date = env::var("PRICING_REFERENCE_DATE")
            .ok()
            .map(|date| {
                NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
                    AppError::configuration(format!("Invalid PRICING_REFERENCE_DATE: {}", date))
                })
            })
            .transpose()?;

        Ok(PricingConfig {
            timezone,
            unknown_product_policy,
            reference_date,
            rules: PricingRules::default(),
        })
    }

    pub fn clock(&self) -> ReferenceClock {
        match self.reference_date {
            Some(date) => ReferenceClock::Fixed(date),
            None => ReferenceClock::System(self.timezone),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.rules.validate().map_err(AppError::Configuration)
    }
}
