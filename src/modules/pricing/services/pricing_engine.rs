use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::modules::pricing::models::{LineItem, PricingRequest, PricingResult, TierTerms};
use crate::modules::pricing::services::PricingRules;
use crate::modules::pricing::PricingError;

/// What to do with a line whose product the shop doesn't know
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownProductPolicy {
    /// The line is priced at zero
    #[default]
    Ignore,
    /// The whole cart is refused
    Reject,
}

impl std::str::FromStr for UnknownProductPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(UnknownProductPolicy::Ignore),
            "reject" => Ok(UnknownProductPolicy::Reject),
            _ => Err(format!("Invalid unknown product policy: {}", s)),
        }
    }
}

/// Prices shopping carts against a fixed set of rules
#[derive(Debug, Clone)]
pub struct PricingEngine {
    rules: Arc<PricingRules>,
    unknown_products: UnknownProductPolicy,
}

impl PricingEngine {
    pub fn new(rules: Arc<PricingRules>) -> Self {
        Self {
            rules,
            unknown_products: UnknownProductPolicy::default(),
        }
    }

    pub fn with_unknown_product_policy(mut self, policy: UnknownProductPolicy) -> Self {
        self.unknown_products = policy;
        self
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Price a decoded request
    pub fn price(&self, request: &PricingRequest, reference_date: NaiveDate) -> PricingResult {
        self.compute_total(
            &request.customer_type,
            request.items.as_deref(),
            reference_date,
        )
    }

    /// Total price of a cart on `reference_date`.
    ///
    /// An unknown tier is refused before anything is priced. A cart with no
    /// item list at all costs 0 and skips the ceiling check; an empty list
    /// still goes through it.
    pub fn compute_total(
        &self,
        tier_identifier: &str,
        items: Option<&[LineItem]>,
        reference_date: NaiveDate,
    ) -> PricingResult {
        let resolved = self.rules.tiers.resolve(tier_identifier)?;

        let Some(items) = items else {
            tracing::debug!(tier = %resolved.tier, "No item list, cart priced at zero");
            return Ok(Decimal::ZERO);
        };

        let discount_active = self.rules.calendar.is_discount_active(reference_date);
        if let Some(window) = self.rules.calendar.active_window(reference_date) {
            tracing::debug!(window = %window.label, date = %reference_date, "Seasonal discount active");
        }

        let mut total = Decimal::ZERO;
        for item in items {
            total += self.line_total(item, resolved.terms, discount_active)?;
        }
        let total = total.normalize();

        if total > resolved.terms.max_price {
            tracing::debug!(
                tier = %resolved.tier,
                total = %total,
                max_price = %resolved.terms.max_price,
                "Cart above tier ceiling"
            );
            return Err(PricingError::PriceCeilingExceeded {
                total,
                label: resolved.terms.label.clone(),
            });
        }

        tracing::debug!(tier = %resolved.tier, items = items.len(), total = %total, "Cart priced");

        Ok(total)
    }

    fn line_total(
        &self,
        item: &LineItem,
        tier_terms: &TierTerms,
        discount_active: bool,
    ) -> PricingResult {
        let product = match self.rules.products.lookup(&item.product_type) {
            Ok(product) => product,
            Err(err) => match self.unknown_products {
                UnknownProductPolicy::Ignore => {
                    tracing::warn!(product_type = %item.product_type, "Ignoring unknown product type");
                    return Ok(Decimal::ZERO);
                }
                UnknownProductPolicy::Reject => return Err(err),
            },
        };

        Ok(product.unit_price(discount_active) * Decimal::from(item.quantity) * tier_terms.discount)
    }
}
