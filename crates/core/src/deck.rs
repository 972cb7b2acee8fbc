use crate::{Card, CardState, RngState, CATALOG};
use serde::{Deserialize, Serialize};

/// Number of distinct tokens in play. Deck size is always twice this, so
/// the pairing invariant holds by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PairCount {
    Six,
    Eight,
    Ten,
}

impl PairCount {
    pub const ALL: [PairCount; 3] = [PairCount::Six, PairCount::Eight, PairCount::Ten];

    pub fn pairs(self) -> usize {
        match self {
            Self::Six => 6,
            Self::Eight => 8,
            Self::Ten => 10,
        }
    }

    pub fn deck_len(self) -> usize {
        self.pairs() * 2
    }

    pub fn from_pairs(pairs: usize) -> Option<Self> {
        match pairs {
            6 => Some(Self::Six),
            8 => Some(Self::Eight),
            10 => Some(Self::Ten),
            _ => None,
        }
    }
}

impl Default for PairCount {
    fn default() -> Self {
        Self::Eight
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Select `pairs` distinct tokens from the catalog, instantiate two
    /// cards per token and permute the full sequence.
    pub fn build(pairs: PairCount, rng: &mut RngState) -> Self {
        let mut catalog = CATALOG;
        rng.shuffle(&mut catalog);
        let mut cards = Vec::with_capacity(pairs.deck_len());
        let mut next_id = 1u32;
        for token in catalog.into_iter().take(pairs.pairs()) {
            for _ in 0..2 {
                cards.push(Card::hidden(next_id, token));
                next_id += 1;
            }
        }
        rng.shuffle(&mut cards);
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: u32) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn card_mut(&mut self, id: u32) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    /// Face-up, unmatched cards in deck order.
    pub fn open_cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|card| card.state == CardState::Open)
            .collect()
    }

    pub fn open_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| card.state == CardState::Open)
            .count()
    }

    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_resolved()).count()
    }

    /// Win condition: non-empty and every card matched.
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(Card::is_resolved)
    }
}
