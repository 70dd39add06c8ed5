//! Client-side game flow: roulette draws, minting accepted cards and browsing
//! the ledger-backed inventory.
//!
//! ```text
//! RouletteIdle --spin--> CardPending --accept/reject--> RouletteIdle
//! RouletteIdle --show_inventory--> InventoryLoading --> InventoryBrowsing
//! InventoryBrowsing --select_slot(occupied)--> InventoryDetail --close_detail--> InventoryBrowsing
//! Inventory* --back--> RouletteIdle
//! ```

use std::{collections::BTreeMap, fmt};

use common::{
    CardDefinition, MintAuth, MintRequest, MintResponse, NftSummary, SignatureResult,
};
use rand::Rng;
use tracing::{info, warn};

use crate::{catalog::Catalog, errors::SdkErrors, image::ImageLoader, sdk::GachaSDK};

/// The inventory grid is always 5x5.
pub const INVENTORY_SLOTS: usize = 25;
pub const DEFAULT_AUTH_MESSAGE: &str = "gacha roulette mint";

/// The network calls the game depends on.
#[allow(async_fn_in_trait)]
pub trait MintBackend {
    async fn sign(&self, message: &str) -> Result<SignatureResult, SdkErrors>;
    async fn mint(&self, request: &MintRequest) -> Result<MintResponse, SdkErrors>;
    async fn list_nfts(&self, address: &str) -> Result<Vec<NftSummary>, SdkErrors>;
}

impl MintBackend for GachaSDK {
    async fn sign(&self, message: &str) -> Result<SignatureResult, SdkErrors> {
        GachaSDK::sign(self, message).await
    }

    async fn mint(&self, request: &MintRequest) -> Result<MintResponse, SdkErrors> {
        GachaSDK::mint(self, request).await
    }

    async fn list_nfts(&self, address: &str) -> Result<Vec<NftSummary>, SdkErrors> {
        GachaSDK::list_nfts(self, address).await
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Account that receives minted cards and whose NFTs fill the inventory.
    pub account_address: String,
    /// Message signed as the mint `auth` proof.
    pub auth_message: String,
}

impl GameConfig {
    pub fn new(account_address: impl Into<String>) -> Self {
        Self {
            account_address: account_address.into(),
            auth_message: DEFAULT_AUTH_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    RouletteIdle,
    CardPending { index: usize, card: CardDefinition },
    InventoryLoading,
    InventoryBrowsing,
    InventoryDetail(InventoryCard),
}

impl GameState {
    pub fn name(&self) -> &'static str {
        match self {
            GameState::RouletteIdle => "on the roulette",
            GameState::CardPending { .. } => "a drawn card is pending",
            GameState::InventoryLoading => "the inventory is loading",
            GameState::InventoryBrowsing => "browsing the inventory",
            GameState::InventoryDetail(_) => "viewing a card",
        }
    }

    pub fn on_inventory(&self) -> bool {
        matches!(
            self,
            GameState::InventoryLoading
                | GameState::InventoryBrowsing
                | GameState::InventoryDetail(_)
        )
    }
}

/// A card as shown in the inventory grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryCard {
    /// Ledger token id, absent for cards only known locally.
    pub token_id: Option<String>,
    pub name: String,
    pub description: String,
    pub image: String,
}

impl From<&CardDefinition> for InventoryCard {
    fn from(card: &CardDefinition) -> Self {
        Self {
            token_id: None,
            name: card.name.clone(),
            description: card.description.clone(),
            image: card.image.clone(),
        }
    }
}

impl From<NftSummary> for InventoryCard {
    fn from(nft: NftSummary) -> Self {
        Self {
            token_id: Some(nft.nftoken_id),
            name: nft.name,
            description: nft.description,
            image: nft.base64image,
        }
    }
}

/// User-facing outcome messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Minted { name: String },
    MintFailed { name: String, reason: String },
    InventoryUnavailable { reason: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Minted { name } => write!(f, "{name} minted successfully!"),
            Notice::MintFailed { name, reason } => write!(f, "Failed to mint {name}: {reason}"),
            Notice::InventoryUnavailable { reason } => {
                write!(f, "Could not load the inventory: {reason}")
            }
        }
    }
}

pub struct Game<R> {
    catalog: Catalog,
    config: GameConfig,
    images: ImageLoader,
    rng: R,
    state: GameState,
    inventory: Vec<InventoryCard>,
    notices: Vec<Notice>,
}

impl<R: Rng> Game<R> {
    pub fn new(catalog: Catalog, config: GameConfig, images: ImageLoader, rng: R) -> Self {
        Self {
            catalog,
            config,
            images,
            rng,
            state: GameState::RouletteIdle,
            inventory: Vec::new(),
            notices: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn inventory(&self) -> &[InventoryCard] {
        &self.inventory
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Fixed-size grid view of the inventory; empty slots are `None`.
    pub fn slots(&self) -> Vec<Option<&InventoryCard>> {
        (0..INVENTORY_SLOTS).map(|i| self.inventory.get(i)).collect()
    }

    fn invalid(&self, action: &'static str) -> SdkErrors {
        SdkErrors::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }

    pub fn spin(&mut self) -> Result<&CardDefinition, SdkErrors> {
        if self.state != GameState::RouletteIdle {
            return Err(self.invalid("spin"));
        }
        let (index, card) = self.catalog.draw(&mut self.rng);
        info!(card = %card.name, "roulette landed on card {index}");
        self.state = GameState::CardPending {
            index,
            card: card.clone(),
        };
        Ok(card)
    }

    pub fn reject(&mut self) -> Result<(), SdkErrors> {
        if !matches!(self.state, GameState::CardPending { .. }) {
            return Err(self.invalid("reject a card"));
        }
        self.state = GameState::RouletteIdle;
        Ok(())
    }

    /// Signs, then mints the pending card. The card joins the inventory only when
    /// both calls succeed; either way the roulette goes back to idle.
    pub async fn accept<B: MintBackend>(&mut self, backend: &B) -> Result<Notice, SdkErrors> {
        let (index, card) = match &self.state {
            GameState::CardPending { index, card } => (*index, card.clone()),
            _ => return Err(self.invalid("accept a card")),
        };
        let notice = match self.mint_card(backend, index, &card).await {
            Ok(response) => {
                info!(card = %card.name, "card minted: {}", response.data);
                self.inventory.push(InventoryCard::from(&card));
                Notice::Minted {
                    name: card.name.clone(),
                }
            }
            Err(e) => {
                warn!(card = %card.name, "mint failed: {e}");
                Notice::MintFailed {
                    name: card.name.clone(),
                    reason: e.to_string(),
                }
            }
        };
        self.state = GameState::RouletteIdle;
        self.notices.push(notice.clone());
        Ok(notice)
    }

    async fn mint_card<B: MintBackend>(
        &self,
        backend: &B,
        index: usize,
        card: &CardDefinition,
    ) -> Result<MintResponse, SdkErrors> {
        let base64image = self.images.data_url(&card.image).await?;
        let signature = backend.sign(&self.config.auth_message).await?;
        let request = MintRequest {
            auth: MintAuth {
                message: self.config.auth_message.clone(),
                signature: signature.signature,
                public_key: signature.public_key,
            },
            recipient_address: self.config.account_address.clone(),
            base64image,
            name: card.name.clone(),
            description: card.description.clone(),
            game_metadata: BTreeMap::from([
                ("catalogIndex".to_string(), index.to_string()),
                ("signer".to_string(), signature.classic_address),
            ]),
        };
        backend.mint(&request).await
    }

    /// Replaces the local inventory with the account's NFTs. A failed lookup keeps
    /// the local list and records a notice.
    pub async fn show_inventory<B: MintBackend>(&mut self, backend: &B) -> Result<(), SdkErrors> {
        if self.state != GameState::RouletteIdle {
            return Err(self.invalid("open the inventory"));
        }
        self.state = GameState::InventoryLoading;
        match backend.list_nfts(&self.config.account_address).await {
            Ok(nfts) => {
                info!(count = nfts.len(), "inventory loaded from ledger");
                self.inventory = nfts.into_iter().map(InventoryCard::from).collect();
            }
            Err(e) => {
                warn!("inventory lookup failed: {e}");
                self.notices.push(Notice::InventoryUnavailable {
                    reason: e.to_string(),
                });
            }
        }
        self.state = GameState::InventoryBrowsing;
        Ok(())
    }

    /// Opens the detail view when slot `slot` holds a card. Returns whether it did.
    pub fn select_slot(&mut self, slot: usize) -> Result<bool, SdkErrors> {
        if !matches!(
            self.state,
            GameState::InventoryBrowsing | GameState::InventoryDetail(_)
        ) {
            return Err(self.invalid("select a slot"));
        }
        match self.inventory.get(slot).filter(|_| slot < INVENTORY_SLOTS) {
            Some(card) => {
                self.state = GameState::InventoryDetail(card.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn close_detail(&mut self) {
        if matches!(self.state, GameState::InventoryDetail(_)) {
            self.state = GameState::InventoryBrowsing;
        }
    }

    pub fn back(&mut self) -> Result<(), SdkErrors> {
        if !self.state.on_inventory() {
            return Err(self.invalid("go back to the roulette"));
        }
        self.state = GameState::RouletteIdle;
        Ok(())
    }
}
