use crate::errors::{FraudError, FraudResult};
use crate::metrics;
use crate::models::{HealthResponse, TransactionInput};
use crate::scoring::FraudScorer;
use actix_web::{web, HttpResponse};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

// ===== Health Check =====
pub async fn health_check() -> HttpResponse {
    let uptime = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
    })
}

// ===== Score Transaction =====
pub async fn score_transaction(
    req: web::Json<TransactionInput>,
    scorer: web::Data<Arc<FraudScorer>>,
) -> HttpResponse {
    let result = scorer.score(&req.into_inner());

    metrics::observe_score(&result);

    HttpResponse::Ok().json(result)
}

// ===== Prometheus Metrics =====
pub async fn export_metrics() -> FraudResult<HttpResponse> {
    let body = metrics::metrics_handler().map_err(|e| FraudError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(body))
}

// ===== Configure Routes =====
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/fraud-detection", web::post().to(score_transaction))
        .route("/health", web::get().to(health_check))
        .route("/metrics", web::get().to(export_metrics));
}
