use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kamba_payments::config::Config;
use kamba_payments::modules::gateways::services::GatewayAuthClient;
use kamba_payments::modules::orders::InMemoryOrderRepository;
use kamba_payments::modules::revenue::RevenueService;
use kamba_payments::modules::settlements::{
    InMemoryAccessGrantRepository, InMemoryBalanceRepository, SettlementService,
};
use kamba_payments::modules::{commissions, revenue, settlements};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kamba_payments=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Kamba Payments settlement service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Repository seams; the managed data platform replaces these in
    // deployments that persist outside the process
    let orders = InMemoryOrderRepository::new();
    let balances = InMemoryBalanceRepository::new();
    let access_grants = InMemoryAccessGrantRepository::new();

    let gateway = Arc::new(GatewayAuthClient::new(&config.gateway));

    let revenue_service = web::Data::new(RevenueService::new(orders.clone()));
    let settlement_service = web::Data::new(
        SettlementService::new(orders.clone(), balances.clone(), access_grants.clone())
            .with_gateway(gateway),
    );
    let config_data = web::Data::new(config.clone());

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(config_data.clone())
            .app_data(revenue_service.clone())
            .app_data(settlement_service.clone())
            .configure(settlements::controllers::configure)
            .configure(revenue::controllers::configure)
            .configure(commissions::controllers::configure)
            .route("/health", web::get().to(health_check))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "kamba-payments"
    }))
}
