use std::path::PathBuf;

use clap::Parser;
use gacha_sdk::{game::DEFAULT_AUTH_MESSAGE, Catalog, GachaSDK, Game, GameConfig, ImageLoader};
use url::Url;

use crate::errors::CliErrors;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Spin {
    #[arg(long, env)]
    pub relay_url: Url,
    /// Recipient of minted cards.
    #[arg(long, env)]
    pub account_address: String,
    /// JSON card list; the built-in five cards otherwise.
    #[arg(long, env)]
    pub catalog: Option<PathBuf>,
    /// Base directory for relative card images.
    #[arg(long, env, default_value = ".")]
    pub asset_dir: PathBuf,
    #[arg(long, env, default_value = DEFAULT_AUTH_MESSAGE)]
    pub auth_message: String,
    /// Mint the drawn card instead of discarding it.
    #[arg(long, default_value = "false")]
    pub accept: bool,
}

impl Spin {
    pub async fn run(self) -> Result<(), CliErrors> {
        let catalog = match &self.catalog {
            Some(path) => Catalog::load(path).await?,
            None => Catalog::default(),
        };
        let sdk = GachaSDK::new(self.relay_url)?;
        let config = GameConfig {
            account_address: self.account_address,
            auth_message: self.auth_message,
        };
        let images = ImageLoader::new(sdk.client.clone(), self.asset_dir);
        let mut game = Game::new(catalog, config, images, rand::thread_rng());

        let card = game.spin()?;
        println!("{}: {}", card.name, card.description);
        if self.accept {
            let notice = game.accept(&sdk).await?;
            println!("{notice}");
        } else {
            game.reject()?;
            println!("Card discarded");
        }
        Ok(())
    }
}
