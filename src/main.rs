use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use fraud_detection::{
    config::Config, errors::FraudError, handlers, metrics, scoring::FraudScorer,
};
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("fraud_detection=debug,actix_web=info")
        .init();

    info!("Starting Fraud Detection Engine...");

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    info!("Configuration loaded successfully");

    if let Err(e) = metrics::register_metrics(prometheus::default_registry()) {
        error!("Failed to register metrics: {}", e);
    }

    // Initialize the scorer; it is stateless and shared across workers
    let scorer = Arc::new(FraudScorer::new());
    info!("Scorer initialized");

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {}", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(scorer.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                FraudError::InvalidPayload(err.to_string()).into()
            }))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run()
    .await
}
