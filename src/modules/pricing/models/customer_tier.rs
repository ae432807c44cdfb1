use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modules::pricing::PricingError;

/// Customer classifications the shop prices for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerTier {
    #[serde(rename = "STANDARD_CUSTOMER")]
    Standard,
    #[serde(rename = "PREMIUM_CUSTOMER")]
    Premium,
    #[serde(rename = "PLATINUM_CUSTOMER")]
    Platinum,
}

impl CustomerTier {
    pub const ALL: [CustomerTier; 3] = [
        CustomerTier::Standard,
        CustomerTier::Premium,
        CustomerTier::Platinum,
    ];

    /// Identifier used on the wire
    pub fn identifier(&self) -> &'static str {
        match self {
            CustomerTier::Standard => "STANDARD_CUSTOMER",
            CustomerTier::Premium => "PREMIUM_CUSTOMER",
            CustomerTier::Platinum => "PLATINUM_CUSTOMER",
        }
    }

    /// Discount multiplier, label and price ceiling the shop starts with
    pub fn default_terms(&self) -> TierTerms {
        match self {
            CustomerTier::Standard => TierTerms::new("standard", Decimal::ONE, Decimal::from(200)),
            CustomerTier::Premium => {
                TierTerms::new("premium", Decimal::new(9, 1), Decimal::from(800))
            }
            CustomerTier::Platinum => {
                TierTerms::new("platinum", Decimal::new(5, 1), Decimal::from(2000))
            }
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl std::str::FromStr for CustomerTier {
    type Err = PricingError;

    /// Exact, case-sensitive match on the wire identifier
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CustomerTier::ALL
            .into_iter()
            .find(|tier| tier.identifier() == s)
            .ok_or_else(|| PricingError::UnknownTier(s.to_string()))
    }
}

/// Pricing terms attached to a customer tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTerms {
    /// Human-readable name used in rejection messages
    pub label: String,
    /// Multiplier applied to every line (0 < discount <= 1)
    pub discount: Decimal,
    /// Maximum total the tier may check out
    pub max_price: Decimal,
}

impl TierTerms {
    pub fn new(label: impl Into<String>, discount: Decimal, max_price: Decimal) -> Self {
        Self {
            label: label.into(),
            discount,
            max_price,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.discount <= Decimal::ZERO || self.discount > Decimal::ONE {
            return Err(format!(
                "Discount for {} customers must be in (0, 1], got {}",
                self.label, self.discount
            ));
        }

        if self.max_price <= Decimal::ZERO {
            return Err(format!(
                "Maximum price for {} customers must be positive, got {}",
                self.label, self.max_price
            ));
        }

        Ok(())
    }
}
