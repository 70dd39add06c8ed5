pub mod errors;
pub mod external;
pub mod mint;
pub mod nfts;
pub mod server;
pub mod signer;
pub mod utils;

use clap::Parser;
use url::Url;

/// Command line arguments for the relay server
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, env, default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, short, env, default_value = "3000")]
    pub port: u16,
    /// Ledger family seed used by `/sign`. Without it signing requests fail.
    #[arg(long, env, hide_env_values = true)]
    pub secret_seed: Option<String>,
    #[arg(long, env, default_value = "https://web3projectapi.vercel.app")]
    pub mint_api_url: Url,
    #[arg(long, env, default_value = "https://web3projectapi.vercel.app")]
    pub nft_api_url: Url,
    #[arg(long, env, default_value = "https://moccasin-quickest-mongoose-160.mypinata.cloud")]
    pub ipfs_gateway_url: Url,
    /// Upper bound on concurrent metadata fetches per NFT listing.
    #[arg(long, env, default_value = "8")]
    pub metadata_concurrency: usize,
    /// Outbound request timeout in seconds.
    #[arg(long, env, default_value = "30")]
    pub request_timeout: u64,
    /// Verify `auth` proofs locally before relaying mint requests.
    #[arg(long, env, default_value = "false")]
    pub verify_mint_auth: bool,
}
