pub mod builder;
pub mod catalog;
pub mod errors;
pub mod game;
pub mod image;
pub mod sdk;

pub use builder::GachaSDKBuilder;
pub use catalog::Catalog;
pub use common::{CardDefinition, MintRequest, MintResponse, NftSummary, SignatureResult};
pub use errors::SdkErrors;
pub use game::{Game, GameConfig, GameState, InventoryCard, MintBackend, Notice};
pub use image::ImageLoader;
pub use sdk::GachaSDK;
