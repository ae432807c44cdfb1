mod customer_tier;
mod line_item;
mod price;
mod product;
mod seasonal_window;

pub use customer_tier::{CustomerTier, TierTerms};
pub use line_item::{LineItem, PricingRequest, PricingResult};
pub use price::format_price;
pub use product::{ProductTerms, ProductType};
pub use seasonal_window::SeasonalWindow;
