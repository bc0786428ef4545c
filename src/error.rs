use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure envelope returned by every endpoint.
///
/// The client only ever sees the endpoint's generic `message`; the underlying
/// cause is logged. Validation failures and missing wallets both map to
/// HTTP 500, which is what the Mini App front end expects.
#[derive(Debug)]
pub struct ApiError {
    pub message: &'static str,
    pub source: WalletError,
}

impl ApiError {
    pub fn new(message: &'static str, source: WalletError) -> Self {
        Self { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}: {}", self.message, self.source);

        let body = Json(json!({
            "success": false,
            "error": self.message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Attach an endpoint message to a domain result
pub trait ApiContext<T> {
    fn api_context(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T> ApiContext<T> for Result<T, WalletError> {
    fn api_context(self, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(message, e))
    }
}
