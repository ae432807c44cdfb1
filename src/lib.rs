//! Shopping cart pricing service
//!
//! Prices carts from a customer tier, a list of line items and the current
//! date, applying seasonal sales, tier discounts and per-tier price ceilings.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use actix_web::web;

// Re-export commonly used types
pub use modules::pricing;

/// Register every route of the service together with its extractor settings
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(middleware::json_error_handler))
        .configure(modules::health::configure)
        .configure(modules::pricing::controllers::configure);
}
