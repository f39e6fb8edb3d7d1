use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cryptodash_market_data::MarketDataError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MarketData(#[from] MarketDataError),
    #[error("upstream request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
}

/// Uniform failure body returned by every endpoint.
#[derive(Serialize, ToSchema, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::MarketData(e) if e.is_client_error() => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::MarketData(e @ MarketDataError::MissingCredentials) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::MarketData(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal Server Error: {}", e),
            ),
            ApiError::Timeout(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal Server Error: {}", self),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", status.as_u16(), msg);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), msg);
        }
        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
