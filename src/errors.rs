use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FraudError {
    /// Request body failed JSON deserialization
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for FraudError {
    fn error_response(&self) -> HttpResponse {
        match self {
            FraudError::InvalidPayload(_) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "INVALID_PAYLOAD",
                    "message": self.to_string()
                }))
            }
            FraudError::Internal(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "INTERNAL_ERROR",
                    "message": self.to_string()
                }))
            }
        }
    }
}

pub type FraudResult<T> = Result<T, FraudError>;
