use std::net::AddrParseError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::LedgerError;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server error")]
    Server(#[from] std::io::Error),

    #[error("failed to parse address")]
    AddressParse(#[from] AddrParseError),

    #[error("failed to build http client")]
    HttpClient(#[from] reqwest::Error),

    #[error("invalid secret seed")]
    Seed(#[source] LedgerError),

    #[error("invalid configuration")]
    Config(#[from] RelayError),
}

pub const UNKNOWN_EXTERNAL_ERROR: &str = "unknown external error";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("external service responded with {status}")]
    ExternalService { status: StatusCode, body: Value },
    #[error("external service unreachable: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed external response: {0}")]
    Parse(String),
    #[error("signing failed: {0}")]
    Signing(#[from] LedgerError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            RelayError::ExternalService { status, .. } => *status,
            RelayError::Configuration(_)
            | RelayError::Network(_)
            | RelayError::Parse(_)
            | RelayError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether repeating the same call later may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            RelayError::Network(_) => true,
            RelayError::ExternalService { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }

    /// Payload describing the failure, the downstream body for external errors.
    pub fn detail(&self) -> Value {
        match self {
            RelayError::ExternalService { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::warn!("{self}");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

/// `/sign` failures: `{error}` with 500.
#[derive(Debug)]
pub struct SignFailure(pub RelayError);

impl IntoResponse for SignFailure {
    fn into_response(self) -> Response {
        tracing::error!("signing request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// `/mint` failures: `{message, error, status}`, 400 for rejected input and 500 otherwise.
#[derive(Debug)]
pub struct MintFailure(pub RelayError);

impl IntoResponse for MintFailure {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RelayError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!("mint request failed: {}", self.0);
        let body = json!({
            "message": "mint failed",
            "error": self.0.detail(),
            "status": self.0.status().as_u16(),
            "retryable": self.0.is_retryable(),
        });
        (status, Json(body)).into_response()
    }
}
