use clap::Parser;
use gacha_sdk::{
    game::INVENTORY_SLOTS, Catalog, GachaSDK, Game, GameConfig, GameState, ImageLoader,
};
use url::Url;

use crate::errors::CliErrors;

const GRID_WIDTH: usize = 5;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Inventory {
    #[arg(long, env)]
    pub relay_url: Url,
    #[arg(long, env)]
    pub account_address: String,
    /// Show the card in this slot (0-based).
    #[arg(long)]
    pub slot: Option<usize>,
}

impl Inventory {
    pub async fn run(self) -> Result<(), CliErrors> {
        if let Some(slot) = self.slot.filter(|slot| *slot >= INVENTORY_SLOTS) {
            return Err(CliErrors::SlotOutOfRange(slot));
        }
        let sdk = GachaSDK::new(self.relay_url)?;
        let images = ImageLoader::new(sdk.client.clone(), ".");
        let mut game = Game::new(
            Catalog::default(),
            GameConfig::new(self.account_address),
            images,
            rand::thread_rng(),
        );
        game.show_inventory(&sdk).await?;
        for notice in game.notices() {
            eprintln!("{notice}");
        }

        for (row, cells) in game.slots().chunks(GRID_WIDTH).enumerate() {
            let line: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let name = cell.map(|card| card.name.as_str()).unwrap_or("-");
                    format!("[{:>2}] {name:<16}", row * GRID_WIDTH + col)
                })
                .collect();
            println!("{}", line.join(" "));
        }

        if let Some(slot) = self.slot {
            if !game.select_slot(slot)? {
                println!("Slot {slot} is empty");
            } else if let GameState::InventoryDetail(card) = game.state() {
                println!();
                println!("{}", card.name);
                println!("{}", card.description);
                if let Some(token_id) = &card.token_id {
                    println!("token: {token_id}");
                }
            }
        }
        Ok(())
    }
}
