use axum::{extract::State, routing::post, Json, Router};
use bytes::Bytes;
use common::{ledger, ledger_hex, MintAuth, MintRequest, MintResponse};
use serde_json::Value;

use crate::{
    errors::{MintFailure, RelayError},
    server::AppState,
};

pub mod relay;

pub use relay::MintRelay;

pub const MINT_SUCCESS: &str = "success";

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/mint", post(mint))
        .route("/mint-proxy", post(mint_proxy))
        .with_state(app_state)
}

/// Checks the proof carried by a mint request: `signature` over the hex-encoded
/// `message` under `public_key`.
pub fn verify_auth(auth: &MintAuth) -> Result<(), RelayError> {
    ledger::verify(&ledger_hex(&auth.message), &auth.signature, &auth.public_key)
        .map_err(|e| RelayError::InvalidArgument(format!("auth proof rejected: {e}")))
}

pub async fn mint(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MintResponse>, MintFailure> {
    let request: MintRequest = serde_json::from_slice(&body)
        .map_err(|e| MintFailure(RelayError::InvalidArgument(e.to_string())))?;
    tracing::info!(
        name = %request.name,
        recipient = %request.recipient_address,
        "mint requested"
    );
    if state.verify_mint_auth {
        verify_auth(&request.auth).map_err(MintFailure)?;
    }
    let data = state.mint_relay.forward(body).await.map_err(MintFailure)?;
    Ok(Json(MintResponse {
        message: MINT_SUCCESS.to_string(),
        data,
    }))
}

/// Pass-through variant: any JSON in, the external JSON out unchanged.
pub async fn mint_proxy(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    serde_json::from_slice::<Value>(&body)
        .map_err(|e| RelayError::InvalidArgument(format!("body is not json: {e}")))?;
    state.mint_relay.forward(body).await.map(Json)
}
