use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_NAME: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureResult {
    pub classic_address: String,
    pub signature: String,
    pub public_key: String,
}

/// Display data of an NFT held by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftSummary {
    #[serde(rename = "NFTokenID")]
    pub nftoken_id: String,
    pub name: String,
    pub description: String,
    pub base64image: String,
}

impl NftSummary {
    /// Stand-in for an NFT whose off-chain metadata could not be resolved.
    pub fn placeholder(nftoken_id: impl Into<String>) -> Self {
        Self {
            nftoken_id: nftoken_id.into(),
            name: UNKNOWN_NAME.to_string(),
            description: NO_DESCRIPTION.to_string(),
            base64image: String::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == UNKNOWN_NAME && self.description == NO_DESCRIPTION && self.base64image.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftListResponse {
    pub nfts: Vec<NftSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintResponse {
    pub message: String,
    pub data: Value,
}

/// A card of the roulette catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    #[serde(rename = "imagem", alias = "image")]
    pub image: String,
    #[serde(rename = "descricao", alias = "description")]
    pub description: String,
}
