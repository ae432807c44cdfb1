use rust_decimal::Decimal;

use crate::modules::pricing::models::format_price;

/// Reasons a cart can be refused a price
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// The customer tier identifier matches none of the known tiers
    #[error("Unknown customer tier: {0}")]
    UnknownTier(String),

    /// The cart total is above the tier's maximum allowed price
    #[error("Price ({}) is too high for {label} customer", format_price(.total))]
    PriceCeilingExceeded { total: Decimal, label: String },

    /// A line item names a product the shop doesn't sell
    #[error("Unknown product type: {0}")]
    UnknownProductType(String),
}
