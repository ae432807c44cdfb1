use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modules::pricing::PricingError;

/// Products the shop sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "TSHIRT")]
    TShirt,
    #[serde(rename = "DRESS")]
    Dress,
    #[serde(rename = "JACKET")]
    Jacket,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [ProductType::TShirt, ProductType::Dress, ProductType::Jacket];

    pub fn identifier(&self) -> &'static str {
        match self {
            ProductType::TShirt => "TSHIRT",
            ProductType::Dress => "DRESS",
            ProductType::Jacket => "JACKET",
        }
    }

    /// Unit price and in-season multiplier the shop starts with
    pub fn default_terms(&self) -> ProductTerms {
        match self {
            ProductType::TShirt => ProductTerms::new(Decimal::from(30), Decimal::ONE),
            ProductType::Dress => ProductTerms::new(Decimal::from(50), Decimal::new(8, 1)),
            ProductType::Jacket => ProductTerms::new(Decimal::from(100), Decimal::new(9, 1)),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl std::str::FromStr for ProductType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .into_iter()
            .find(|product| product.identifier() == s)
            .ok_or_else(|| PricingError::UnknownProductType(s.to_string()))
    }
}

/// Price table entry for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTerms {
    pub base_price: Decimal,
    /// Applied only while a seasonal window is open
    pub seasonal_multiplier: Decimal,
}

impl ProductTerms {
    pub fn new(base_price: Decimal, seasonal_multiplier: Decimal) -> Self {
        Self {
            base_price,
            seasonal_multiplier,
        }
    }

    /// Unit price on a given day
    pub fn unit_price(&self, discount_active: bool) -> Decimal {
        if discount_active {
            self.base_price * self.seasonal_multiplier
        } else {
            self.base_price
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_price < Decimal::ZERO {
            return Err(format!("Base price cannot be negative, got {}", self.base_price));
        }

        if self.seasonal_multiplier <= Decimal::ZERO || self.seasonal_multiplier > Decimal::ONE {
            return Err(format!(
                "Seasonal multiplier must be in (0, 1], got {}",
                self.seasonal_multiplier
            ));
        }

        Ok(())
    }
}
