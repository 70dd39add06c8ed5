use bytes::Bytes;
use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;
use url::Url;

use crate::{errors::RelayError, external};

/// Forwards mint payloads to the external minting API.
#[derive(Debug, Clone)]
pub struct MintRelay {
    client: Client,
    endpoint: Url,
}

impl MintRelay {
    pub fn new(client: Client, mint_api: &Url) -> Result<Self, RelayError> {
        Ok(Self {
            client,
            endpoint: external::endpoint(mint_api, ["mintNFT"])?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Exactly one POST per call, body forwarded unmodified. No retry.
    pub async fn forward(&self, body: Bytes) -> Result<Value, RelayError> {
        tracing::info!(endpoint = %self.endpoint, "relaying mint request");
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        tracing::info!(status = %response.status(), "mint api responded");
        external::read_body(response).await
    }
}
