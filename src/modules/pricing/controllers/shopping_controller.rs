//! Shopping controller for HTTP endpoints
//!
//! Decodes price requests, picks the reference date in the shop's time zone
//! and hands both to the pricing engine.

use actix_web::{http::header::ContentType, web, HttpResponse};
use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::core::error::AppError;
use crate::core::timezone;
use crate::modules::pricing::models::{format_price, PricingRequest};
use crate::modules::pricing::services::PricingEngine;

/// Where the controller takes "today" from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceClock {
    /// Wall clock, read in the given zone
    System(Tz),
    /// Always the same date
    Fixed(NaiveDate),
}

impl ReferenceClock {
    pub fn today(&self) -> NaiveDate {
        match self {
            ReferenceClock::System(tz) => timezone::today_in(*tz),
            ReferenceClock::Fixed(date) => *date,
        }
    }
}

/// Shared state behind the shopping routes
#[derive(Debug, Clone)]
pub struct ShoppingState {
    pub engine: PricingEngine,
    pub clock: ReferenceClock,
}

impl ShoppingState {
    pub fn new(engine: PricingEngine, clock: ReferenceClock) -> Self {
        Self { engine, clock }
    }
}

/// Price a shopping cart
///
/// POST /shopping
///
/// Responds with the total as a plain decimal string (`405.0`), or a bare
/// `0` when the request carries no `items` at all.
pub async fn get_price(
    state: web::Data<ShoppingState>,
    request: web::Json<PricingRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let reference_date = state.clock.today();

    tracing::info!(
        customer_type = %request.customer_type,
        items = request.items.as_ref().map_or(0, Vec::len),
        date = %reference_date,
        "Pricing cart"
    );

    let total = state.engine.price(&request, reference_date).map_err(|err| {
        tracing::info!(reason = %err, "Cart rejected");
        err
    })?;

    let body = match request.items {
        Some(_) => format_price(&total),
        None => "0".to_string(),
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body))
}

/// Configure shopping routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/shopping").route(web::post().to(get_price)));
}
