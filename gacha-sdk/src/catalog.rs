use std::path::Path;

use common::CardDefinition;
use rand::Rng;

use crate::errors::SdkErrors;

const DEFAULT_CARD_COUNT: usize = 5;

/// The fixed set of cards the roulette draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<CardDefinition>,
}

impl Catalog {
    pub fn new(cards: Vec<CardDefinition>) -> Result<Self, SdkErrors> {
        if cards.is_empty() {
            return Err(SdkErrors::EmptyCatalog);
        }
        Ok(Self { cards })
    }

    /// Reads a JSON array of cards.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SdkErrors> {
        let contents = tokio::fs::read_to_string(path).await?;
        Self::new(serde_json::from_str(&contents)?)
    }

    pub fn cards(&self) -> &[CardDefinition] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Uniform pick, returning the catalog index with the card.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> (usize, &CardDefinition) {
        let index = rng.gen_range(0..self.cards.len());
        (index, &self.cards[index])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let cards = (1..=DEFAULT_CARD_COUNT)
            .map(|n| CardDefinition {
                name: format!("Carta {n}"),
                image: format!("/cartas/carta{n}.png"),
                description: format!("Descrição da Carta {n}"),
            })
            .collect();
        Self { cards }
    }
}
