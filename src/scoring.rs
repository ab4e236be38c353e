use crate::models::{Decision, ScoreResult, TransactionInput};
use tracing::debug;

/// Scores above this value are routed to manual review.
const REVIEW_THRESHOLD: u32 = 70;

pub struct FraudScorer {
    // Could hold tunable rule weights in future
}

impl FraudScorer {
    pub fn new() -> Self {
        FraudScorer {}
    }

    /// Evaluate a single transaction against the rule set.
    ///
    /// The three rules are independent and additive; each maps one
    /// attribute to a banded contribution and the total is their sum.
    pub fn score(&self, tx: &TransactionInput) -> ScoreResult {
        // ===== 1. TRANSACTION TYPE =====
        let type_score = self.transaction_type_score(&tx.transaction_type);

        // ===== 2. TRANSACTION AMOUNT =====
        let amount_score = self.transaction_amount_score(tx.transaction_amount);

        // ===== 3. BALANCE AFTER TRANSACTION =====
        let balance_score = self.balance_after_score(tx.account_balance_after);

        let fraud_score = type_score + amount_score + balance_score;

        // ===== DECISION LOGIC =====
        let decision = if fraud_score > REVIEW_THRESHOLD {
            Decision::Review
        } else {
            Decision::Approve
        };

        debug!(
            "Fraud score calculated: {} (decision: {:?}) for {} transaction",
            fraud_score, decision, tx.transaction_type
        );

        ScoreResult {
            fraud_score,
            decision,
        }
    }

    // Unrecognized labels score 0, same as a missing field.
    fn transaction_type_score(&self, transaction_type: &str) -> u32 {
        match transaction_type {
            "Deposit" => 10,
            "Withdrawal" => 30,
            "Transfer" => 50,
            _ => 0,
        }
    }

    fn transaction_amount_score(&self, amount: f64) -> u32 {
        match amount {
            a if a > 10_000.0 => 50,
            a if a > 5_000.0 => 30,
            a if a > 1_000.0 => 10,
            _ => 0,
        }
    }

    fn balance_after_score(&self, balance: f64) -> u32 {
        match balance {
            b if b < 0.0 => 50,
            b if b < 500.0 => 30,
            _ => 0,
        }
    }
}

impl Default for FraudScorer {
    fn default() -> Self {
        Self::new()
    }
}
