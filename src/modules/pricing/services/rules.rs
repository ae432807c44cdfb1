use crate::modules::pricing::services::{ProductCatalog, SeasonalDiscountCalendar, TierCatalog};

/// Every rule table the engine prices with.
///
/// Built once at startup and shared read-only between workers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingRules {
    pub tiers: TierCatalog,
    pub calendar: SeasonalDiscountCalendar,
    pub products: ProductCatalog,
}

impl PricingRules {
    pub fn validate(&self) -> Result<(), String> {
        self.tiers.validate()?;
        self.calendar.validate()?;
        self.products.validate()
    }
}
