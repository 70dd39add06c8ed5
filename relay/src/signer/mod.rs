use axum::{extract::State, routing::post, Json, Router};
use bytes::Bytes;
use common::{ledger_hex, Seed, SignRequest, SignatureResult};

use crate::{
    errors::{RelayError, SignFailure},
    server::AppState,
};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/sign", post(sign))
        .with_state(app_state)
}

/// Signs messages with the configured ledger seed.
#[derive(Debug, Clone, Default)]
pub struct Signer {
    seed: Option<Seed>,
}

impl Signer {
    pub fn new(seed: Option<Seed>) -> Self {
        Self { seed }
    }

    pub fn is_configured(&self) -> bool {
        self.seed.is_some()
    }

    /// Derives the keypair from the seed on every call, hex-encodes `message`
    /// and signs it.
    pub fn sign(&self, message: &str) -> Result<SignatureResult, RelayError> {
        let seed = self
            .seed
            .as_ref()
            .ok_or_else(|| RelayError::Configuration("secret seed is not configured".to_string()))?;
        let keypair = seed.keypair()?;
        let signature = keypair.sign_hex(&ledger_hex(message))?;
        Ok(SignatureResult {
            classic_address: keypair.classic_address(),
            signature,
            public_key: keypair.public_key_hex(),
        })
    }
}

pub async fn sign(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SignatureResult>, SignFailure> {
    let request: SignRequest = serde_json::from_slice(&body)
        .map_err(|e| SignFailure(RelayError::InvalidArgument(e.to_string())))?;
    let result = state.signer.sign(&request.message).map_err(SignFailure)?;
    tracing::info!(address = %result.classic_address, "message signed");
    Ok(Json(result))
}
