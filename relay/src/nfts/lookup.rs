use common::NftSummary;
use futures::{stream, StreamExt};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::{errors::RelayError, external};

const FALLBACK_NAME: &str = "Unknown Name";
const FALLBACK_DESCRIPTION: &str = "No description available";

/// Raw NFT record as returned by the NFT-query API.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountNft {
    #[serde(rename = "NFTokenID")]
    pub nftoken_id: String,
    #[serde(rename = "URI", default)]
    pub uri: String,
}

#[derive(Debug, Deserialize)]
struct AccountNfts {
    nfts: Vec<AccountNft>,
}

/// Off-chain metadata document stored behind an NFT URI.
#[derive(Debug, Default)]
pub struct NftMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base64image: Option<String>,
}

impl NftMetadata {
    /// Reads each field independently; a field that is missing or not a string
    /// is left unset.
    pub fn from_document(document: &Value) -> Self {
        let field = |key: &str| document.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            name: field("name"),
            description: field("description"),
            base64image: field("base64image"),
        }
    }

    pub fn into_summary(self, nftoken_id: String) -> NftSummary {
        fn or_fallback(value: Option<String>, fallback: &str) -> String {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        }
        NftSummary {
            nftoken_id,
            name: or_fallback(self.name, FALLBACK_NAME),
            description: or_fallback(self.description, FALLBACK_DESCRIPTION),
            base64image: self.base64image.unwrap_or_default(),
        }
    }
}

/// Hex URI field to the content path served by the gateway.
pub fn decode_uri(uri_hex: &str) -> Result<String, RelayError> {
    let bytes = hex::decode(uri_hex.trim())
        .map_err(|e| RelayError::Parse(format!("uri is not hex: {e}")))?;
    let uri = String::from_utf8(bytes)
        .map_err(|e| RelayError::Parse(format!("uri is not utf-8: {e}")))?;
    let path = uri.strip_prefix("ipfs://").unwrap_or(&uri).trim_matches('/');
    if path.is_empty() {
        return Err(RelayError::InvalidArgument("empty uri".to_string()));
    }
    Ok(path.to_string())
}

#[derive(Debug, Clone)]
pub struct NftLookup {
    client: Client,
    nft_api: Url,
    gateway: Url,
    concurrency: usize,
}

impl NftLookup {
    pub fn new(client: Client, nft_api: Url, gateway: Url, concurrency: usize) -> Self {
        Self {
            client,
            nft_api,
            gateway,
            concurrency: concurrency.max(1),
        }
    }

    /// One listing request, then one metadata request per NFT with at most
    /// `concurrency` in flight. Output order follows the listing.
    pub async fn list_nfts(&self, address: &str) -> Result<Vec<NftSummary>, RelayError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(RelayError::InvalidArgument(
                "account address is required".to_string(),
            ));
        }
        let url = external::endpoint(&self.nft_api, ["api", "getAccountNFTs", address])?;
        tracing::info!(%address, "listing account nfts");
        let response = self.client.get(url).send().await?;
        let listing = external::read_body(response).await?;
        let listing: AccountNfts = serde_json::from_value(listing)
            .map_err(|e| RelayError::Parse(format!("unexpected nft listing: {e}")))?;
        tracing::debug!(count = listing.nfts.len(), "resolving nft metadata");

        let summaries = stream::iter(listing.nfts)
            .map(|nft| self.resolve(nft))
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await;
        Ok(summaries)
    }

    async fn resolve(&self, nft: AccountNft) -> NftSummary {
        match self.fetch_metadata(&nft.uri).await {
            Ok(metadata) => metadata.into_summary(nft.nftoken_id),
            Err(e) => {
                tracing::warn!(token = %nft.nftoken_id, "nft metadata unavailable: {e}");
                NftSummary::placeholder(nft.nftoken_id)
            }
        }
    }

    async fn fetch_metadata(&self, uri_hex: &str) -> Result<NftMetadata, RelayError> {
        let path = decode_uri(uri_hex)?;
        let url = external::endpoint(
            &self.gateway,
            std::iter::once("ipfs").chain(path.split('/')),
        )?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::ExternalService {
                status,
                body: Value::Null,
            });
        }
        let document = response
            .json::<Value>()
            .await
            .map_err(|e| RelayError::Parse(e.to_string()))?;
        Ok(NftMetadata::from_document(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::NO_DESCRIPTION;
    use std::time::Duration;

    fn unreachable_lookup() -> NftLookup {
        // port 9 (discard) on localhost; nothing should ever be sent
        let url = Url::parse("http://127.0.0.1:9").unwrap();
        let client = external::http_client(Duration::from_millis(200)).unwrap();
        NftLookup::new(client, url.clone(), url, 4)
    }

    #[tokio::test]
    async fn test_empty_address_is_rejected() {
        let lookup = unreachable_lookup();
        assert!(matches!(
            lookup.list_nfts("").await,
            Err(RelayError::InvalidArgument(_))
        ));
        assert!(matches!(
            lookup.list_nfts("   ").await,
            Err(RelayError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_zero_concurrency_is_raised() {
        assert_eq!(unreachable_lookup().concurrency, 4);
        let url = Url::parse("http://127.0.0.1:9").unwrap();
        let lookup = NftLookup::new(Client::new(), url.clone(), url, 0);
        assert_eq!(lookup.concurrency, 1);
    }

    #[test]
    fn test_decode_uri() {
        let cid = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
        assert_eq!(decode_uri(&hex::encode(cid)).unwrap(), cid);
        assert_eq!(
            decode_uri(&hex::encode_upper(format!("ipfs://{cid}/meta.json"))).unwrap(),
            format!("{cid}/meta.json")
        );
        assert!(matches!(decode_uri("zz"), Err(RelayError::Parse(_))));
        assert!(matches!(decode_uri("ff"), Err(RelayError::Parse(_))));
        assert!(matches!(decode_uri(""), Err(RelayError::InvalidArgument(_))));
    }

    #[test]
    fn test_metadata_fallbacks() {
        let summary = NftMetadata {
            name: Some(String::new()),
            description: None,
            base64image: None,
        }
        .into_summary("0008".to_string());
        assert_eq!(summary.name, "Unknown Name");
        assert_eq!(summary.description, "No description available");
        assert_eq!(summary.base64image, "");
        assert_ne!(summary.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_mistyped_field_keeps_the_others() {
        let document = serde_json::json!({
            "name": 5,
            "description": "Rara",
            "base64image": ["not", "a", "string"],
        });
        let summary = NftMetadata::from_document(&document).into_summary("0009".to_string());
        assert_eq!(summary.name, "Unknown Name");
        assert_eq!(summary.description, "Rara");
        assert_eq!(summary.base64image, "");
    }

    #[test]
    fn test_listing_without_nfts_field_is_malformed() {
        let listing = serde_json::json!({ "error": "actNotFound" });
        assert!(serde_json::from_value::<AccountNfts>(listing).is_err());
        let listing = serde_json::json!({ "nfts": [] });
        assert!(serde_json::from_value::<AccountNfts>(listing).unwrap().nfts.is_empty());
    }
}
