#![allow(dead_code)]

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use common::MintAuth;
use gacha_sdk::{GachaSDK, MintRequest};
use relay::{server::AppState, Args};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use url::Url;

pub const GENESIS_SEED: &str = "snoPBrXtMeMyMHUVTgbuqAfg1SUTb";
pub const GENESIS_ADDRESS: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
pub const GENESIS_PUBLIC_KEY: &str =
    "0330E7FC9D56BB25D6893BA3F317AE5BCF33B3291BD63DB32654A313222F7FD020";

/// Requests received by the stub ledger services.
#[derive(Debug, Default)]
pub struct Hits {
    pub mint: AtomicUsize,
    pub listing: AtomicUsize,
    pub metadata: AtomicUsize,
    metadata_in_flight: AtomicUsize,
    metadata_peak: AtomicUsize,
}

impl Hits {
    pub fn mint(&self) -> usize {
        self.mint.load(Ordering::SeqCst)
    }

    pub fn listing(&self) -> usize {
        self.listing.load(Ordering::SeqCst)
    }

    pub fn metadata(&self) -> usize {
        self.metadata.load(Ordering::SeqCst)
    }

    /// Highest number of gateway requests served at the same time.
    pub fn metadata_peak(&self) -> usize {
        self.metadata_peak.load(Ordering::SeqCst)
    }
}

/// An NFT held by the stub account. `metadata: None` makes the gateway answer 404,
/// an empty `cid` gives the token an empty URI.
#[derive(Debug, Clone)]
pub struct StubNft {
    pub token_id: String,
    pub cid: String,
    pub metadata: Option<Value>,
    pub delay: Duration,
}

impl StubNft {
    pub fn new(token_id: &str, cid: &str, metadata: Option<Value>) -> Self {
        Self {
            token_id: token_id.to_string(),
            cid: cid.to_string(),
            metadata,
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn uri(&self) -> String {
        if self.cid.is_empty() {
            return String::new();
        }
        hex::encode_upper(format!("ipfs://{}", self.cid))
    }
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub mint_status: StatusCode,
    pub mint_body: Value,
    pub nfts: Vec<StubNft>,
    /// Replaces the listing built from `nfts`.
    pub listing: Option<(StatusCode, Value)>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            mint_status: StatusCode::OK,
            mint_body: json!({ "id": "abc" }),
            nfts: Vec::new(),
            listing: None,
        }
    }
}

#[derive(Clone)]
struct UpstreamState {
    hits: Arc<Hits>,
    config: Arc<UpstreamConfig>,
}

/// Stub of the minting service, the NFT-query API and the IPFS gateway on one port.
pub struct Upstream {
    pub url: Url,
    pub hits: Arc<Hits>,
}

async fn mint_nft(
    State(state): State<UpstreamState>,
    Json(_body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.hits.mint.fetch_add(1, Ordering::SeqCst);
    (state.config.mint_status, Json(state.config.mint_body.clone()))
}

async fn account_nfts(
    State(state): State<UpstreamState>,
    Path(_address): Path<String>,
) -> (StatusCode, Json<Value>) {
    state.hits.listing.fetch_add(1, Ordering::SeqCst);
    if let Some((status, body)) = &state.config.listing {
        return (*status, Json(body.clone()));
    }
    let nfts: Vec<Value> = state
        .config
        .nfts
        .iter()
        .map(|nft| json!({ "NFTokenID": nft.token_id, "URI": nft.uri(), "Flags": 8 }))
        .collect();
    (StatusCode::OK, Json(json!({ "account": "stub", "nfts": nfts })))
}

async fn ipfs(
    State(state): State<UpstreamState>,
    Path(cid): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let hits = &state.hits;
    hits.metadata.fetch_add(1, Ordering::SeqCst);
    let in_flight = hits.metadata_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    hits.metadata_peak.fetch_max(in_flight, Ordering::SeqCst);

    let nft = state.config.nfts.iter().find(|nft| nft.cid == cid);
    if let Some(nft) = nft {
        tokio::time::sleep(nft.delay).await;
    }
    hits.metadata_in_flight.fetch_sub(1, Ordering::SeqCst);
    nft.and_then(|nft| nft.metadata.clone())
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn serve(app: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    Url::parse(&format!("http://{addr}/")).unwrap()
}

pub async fn spawn_upstream(config: UpstreamConfig) -> Upstream {
    let hits = Arc::new(Hits::default());
    let state = UpstreamState {
        hits: hits.clone(),
        config: Arc::new(config),
    };
    let app = Router::new()
        .route("/mintNFT", post(mint_nft))
        .route("/api/getAccountNFTs/:address", get(account_nfts))
        .route("/ipfs/:cid", get(ipfs))
        .with_state(state);
    Upstream {
        url: serve(app).await,
        hits,
    }
}

/// A local address nothing listens on.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

pub struct Relay {
    pub url: Url,
    pub sdk: GachaSDK,
}

/// Starts the relay against `upstream`. `extra` holds additional command line flags.
pub async fn spawn_relay(upstream: &Upstream, extra: &[&str]) -> Relay {
    spawn_relay_with_mint_api(upstream, upstream.url.as_str(), extra).await
}

/// Like `spawn_relay`, with the minting service at `mint_api`.
pub async fn spawn_relay_with_mint_api(
    upstream: &Upstream,
    mint_api: &str,
    extra: &[&str],
) -> Relay {
    let base = upstream.url.as_str();
    let mut argv = vec![
        "relay",
        "--mint-api-url",
        mint_api,
        "--nft-api-url",
        base,
        "--ipfs-gateway-url",
        base,
        "--request-timeout",
        "5",
    ];
    argv.extend_from_slice(extra);
    let args = Args::parse_from(argv);
    let state = AppState::from_args(&args).unwrap();
    let url = serve(relay::server::router(state)).await;
    Relay {
        sdk: GachaSDK::new(url.clone()).unwrap(),
        url,
    }
}

pub fn mint_request(auth: MintAuth) -> MintRequest {
    MintRequest {
        auth,
        recipient_address: GENESIS_ADDRESS.to_string(),
        base64image: "data:image/png;base64,Y2FyZA==".to_string(),
        name: "Carta 1".to_string(),
        description: "Descrição da Carta 1".to_string(),
        game_metadata: Default::default(),
    }
}

pub fn forged_auth() -> MintAuth {
    MintAuth {
        message: "any message".to_string(),
        signature: "00".repeat(64),
        public_key: GENESIS_PUBLIC_KEY.to_string(),
    }
}
