// Pricing module

pub mod controllers;
pub mod errors;
pub mod models;
pub mod services;

pub use controllers::{ReferenceClock, ShoppingState};
pub use errors::PricingError;
pub use models::{
    format_price, CustomerTier, LineItem, PricingRequest, PricingResult, ProductTerms,
    ProductType, SeasonalWindow, TierTerms,
};
pub use services::{
    PricingEngine, PricingRules, ProductCatalog, SeasonalDiscountCalendar, TierCatalog,
    UnknownProductPolicy,
};
