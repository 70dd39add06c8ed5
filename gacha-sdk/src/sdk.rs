use common::{MintRequest, MintResponse, NftListResponse, NftSummary, SignRequest, SignatureResult};
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use crate::{builder::GachaSDKBuilder, errors::SdkErrors};

/// Client for the relay endpoints.
#[derive(Debug, Clone)]
pub struct GachaSDK {
    pub client: Client,
    pub sign: Url,
    pub mint: Url,
    pub mint_proxy: Url,
    pub nfts: Url,
}

impl GachaSDK {
    pub fn new(url: Url) -> Result<Self, SdkErrors> {
        GachaSDKBuilder::new(url).build()
    }

    pub async fn sign(&self, message: &str) -> Result<SignatureResult, SdkErrors> {
        let response = self
            .client
            .post(self.sign.clone())
            .json(&SignRequest {
                message: message.to_string(),
            })
            .send()
            .await?;
        Ok(success(response).await?.json().await?)
    }

    pub async fn mint(&self, request: &MintRequest) -> Result<MintResponse, SdkErrors> {
        let response = self
            .client
            .post(self.mint.clone())
            .json(request)
            .send()
            .await?;
        Ok(success(response).await?.json().await?)
    }

    pub async fn mint_proxy(&self, payload: &Value) -> Result<Value, SdkErrors> {
        let response = self
            .client
            .post(self.mint_proxy.clone())
            .json(payload)
            .send()
            .await?;
        Ok(success(response).await?.json().await?)
    }

    /// An empty address is still sent; the relay rejects it with 400.
    pub async fn list_nfts(&self, address: &str) -> Result<Vec<NftSummary>, SdkErrors> {
        let mut url = self.nfts.clone();
        let address = address.trim();
        if !address.is_empty() {
            url.path_segments_mut()
                .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
                .push(address);
        }
        let response = self.client.get(url).send().await?;
        let listing: NftListResponse = success(response).await?.json().await?;
        Ok(listing.nfts)
    }
}

async fn success(response: Response) -> Result<Response, SdkErrors> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let text = response.text().await?;
    let message = serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|body| describe(&body))
        .unwrap_or(text);
    tracing::error!("{}", message);
    Err(SdkErrors::RelayResponseError { status, message })
}

fn describe(body: &Value) -> Option<String> {
    let text = |value: &Value| match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    match (body.get("message"), body.get("error")) {
        (Some(message), Some(error)) => Some(format!("{}: {}", text(message), text(error))),
        (Some(message), None) => Some(text(message)),
        (None, Some(error)) => Some(text(error)),
        (None, None) => None,
    }
}
