use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use common::NftListResponse;

use crate::{errors::RelayError, server::AppState};

pub mod lookup;

pub use lookup::NftLookup;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/nfts/:address", get(list_nfts))
        .route("/nfts", get(missing_address))
        .with_state(app_state)
}

pub async fn list_nfts(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<NftListResponse>, RelayError> {
    let nfts = state.nft_lookup.list_nfts(&address).await?;
    Ok(Json(NftListResponse { nfts }))
}

async fn missing_address(
    State(state): State<AppState>,
) -> Result<Json<NftListResponse>, RelayError> {
    let nfts = state.nft_lookup.list_nfts("").await?;
    Ok(Json(NftListResponse { nfts }))
}
