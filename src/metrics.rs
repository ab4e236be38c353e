use crate::models::{Decision, ScoreResult};
use lazy_static::lazy_static;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    // Business metrics
    pub static ref TRANSACTIONS_SCORED: IntCounterVec = IntCounterVec::new(
        Opts::new("transactions_scored_total", "Total transactions scored"),
        &["decision"]
    ).expect("metric can be created");

    pub static ref FRAUD_SCORE_DISTRIBUTION: Histogram = Histogram::with_opts(
        HistogramOpts::new("fraud_score_distribution", "Distribution of computed fraud scores")
            .buckets(vec![10.0, 30.0, 50.0, 70.0, 90.0, 110.0, 130.0, 150.0])
    ).expect("metric can be created");
}

/// Register all metrics with the given registry
pub fn register_metrics(registry: &Registry) -> Result<(), Box<dyn std::error::Error>> {
    registry.register(Box::new(TRANSACTIONS_SCORED.clone()))?;
    registry.register(Box::new(FRAUD_SCORE_DISTRIBUTION.clone()))?;

    Ok(())
}

/// Record one scored transaction
pub fn observe_score(result: &ScoreResult) {
    let decision = match result.decision {
        Decision::Review => "review",
        Decision::Approve => "approve",
    };

    TRANSACTIONS_SCORED.with_label_values(&[decision]).inc();
    FRAUD_SCORE_DISTRIBUTION.observe(result.fraud_score as f64);
}

/// Generate metrics output in Prometheus text format
pub fn metrics_handler() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        let registry = Registry::new();
        let result = register_metrics(&registry);
        assert!(result.is_ok());
    }

    #[test]
    fn test_metrics_handler() {
        // Re-registration of the same collectors is rejected, which is fine here
        let _ = register_metrics(prometheus::default_registry());
        observe_score(&ScoreResult {
            fraud_score: 150,
            decision: Decision::Review,
        });

        let result = metrics_handler();
        assert!(result.is_ok());
        let output = result.unwrap();
        assert!(output.contains("transactions_scored_total"));
    }
}
