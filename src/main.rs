use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use shopping::config::{AppConfig, Config, LogFormat};
use shopping::middleware::{not_found, ErrorHandler, RequestId};
use shopping::pricing::{PricingEngine, ShoppingState};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(&config.app);

    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting shopping pricing service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Pricing time zone: {}", config.pricing.timezone);
    if let Some(date) = config.pricing.reference_date {
        tracing::warn!("Reference date pinned to {}", date);
    }

    let engine = PricingEngine::new(Arc::new(config.pricing.rules.clone()))
        .with_unknown_product_policy(config.pricing.unknown_product_policy);
    let state = web::Data::new(ShoppingState::new(engine, config.pricing.clock()));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(shopping::configure_routes)
            .default_service(web::to(not_found))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!(
        "Server started at http://{} ({} workers)",
        bind_address,
        config.server.workers
    );

    server.await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(app: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("shopping={},actix_web=info", app.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
