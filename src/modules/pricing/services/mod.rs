pub mod pricing_engine;
pub mod product_catalog;
pub mod rules;
pub mod seasonal_calendar;
pub mod tier_catalog;

pub use pricing_engine::{PricingEngine, UnknownProductPolicy};
pub use product_catalog::ProductCatalog;
pub use rules::PricingRules;
pub use seasonal_calendar::SeasonalDiscountCalendar;
pub use tier_catalog::{ResolvedTier, TierCatalog};
