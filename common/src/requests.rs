use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRequest {
    pub message: String,
}

/// Proof that the minting party controls `public_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintAuth {
    pub message: String,
    pub signature: String,
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub auth: MintAuth,
    pub recipient_address: String,
    /// Card artwork as a `data:` URL.
    pub base64image: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub game_metadata: BTreeMap<String, String>,
}
