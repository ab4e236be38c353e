use serde::{Deserialize, Serialize};

// ===== Transaction Input =====
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionInput {
    pub transaction_amount: f64,
    pub transaction_type: String,
    pub account_balance_after: f64,
}

impl Default for TransactionInput {
    fn default() -> Self {
        TransactionInput {
            transaction_amount: 0.0,
            transaction_type: "Unknown".to_string(),
            account_balance_after: 0.0,
        }
    }
}

// ===== Score Result =====
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub fraud_score: u32,
    pub decision: Decision,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Review,  // Manual review needed
    Approve, // Low risk, proceed
}

// ===== Health Check =====
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
