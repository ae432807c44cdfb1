// A cart line and the request that carries a cart.
//
// Field names follow the shop's public payload: `type` for the customer tier
// and the product, `nb` for the quantity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::pricing::PricingError;

/// One entry of a shopping cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier as sent by the client (e.g. `TSHIRT`)
    #[serde(rename = "type")]
    pub product_type: String,

    /// Number of units; 0 when the client leaves it out
    #[serde(rename = "nb", default)]
    pub quantity: i32,
}

impl LineItem {
    pub fn new(product_type: impl Into<String>, quantity: i32) -> Self {
        Self {
            product_type: product_type.into(),
            quantity,
        }
    }
}

/// Body of a price request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Customer tier identifier (e.g. `PREMIUM_CUSTOMER`)
    #[serde(rename = "type")]
    pub customer_type: String,

    /// Cart contents; `None` when the client sent no `items` at all
    #[serde(default)]
    pub items: Option<Vec<LineItem>>,
}

/// Either the cart total or the reason it was refused
pub type PricingResult = Result<Decimal, PricingError>;
