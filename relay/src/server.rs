use crate::external::http_client;
use crate::mint::{self, MintRelay};
use crate::nfts::{self, NftLookup};
use crate::signer::{self, Signer};
use crate::utils::shutdown::shutdown_signal;
use crate::{errors::ServerError, Args};
use axum::{routing::get, serve, Json, Router};
use common::Seed;
use core::net::SocketAddr;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub struct AppState {
    pub signer: Arc<Signer>,
    pub mint_relay: MintRelay,
    pub nft_lookup: NftLookup,
    pub verify_mint_auth: bool,
}

impl AppState {
    pub fn from_args(args: &Args) -> Result<Self, ServerError> {
        let seed = args
            .secret_seed
            .as_deref()
            .filter(|seed| !seed.trim().is_empty())
            .map(str::parse::<Seed>)
            .transpose()
            .map_err(ServerError::Seed)?;
        if seed.is_none() {
            tracing::warn!("SECRET_SEED is not set, /sign will fail");
        }
        let client = http_client(Duration::from_secs(args.request_timeout))?;
        let mint_relay = MintRelay::new(client.clone(), &args.mint_api_url)?;
        let nft_lookup = NftLookup::new(
            client,
            args.nft_api_url.clone(),
            args.ipfs_gateway_url.clone(),
            args.metadata_concurrency,
        );
        Ok(Self {
            signer: Arc::new(Signer::new(seed)),
            mint_relay,
            nft_lookup,
            verify_mint_auth: args.verify_mint_auth,
        })
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .merge(signer::router(app_state.clone()))
        .merge(mint::router(app_state.clone()))
        .merge(nfts::router(app_state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn start(args: Args) -> Result<(), ServerError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_state = AppState::from_args(&args)?;
    info!("Mint API: {}", app_state.mint_relay.endpoint());
    info!("NFT API: {}", args.nft_api_url);
    info!("IPFS gateway: {}", args.ipfs_gateway_url);
    info!(
        "Signer: {}",
        if app_state.signer.is_configured() { "(configured)" } else { "(not set)" }
    );

    let app = router(app_state);

    let address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(ServerError::AddressParse)?;

    let listener = TcpListener::bind(address).await?;

    info!("Listening on {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
