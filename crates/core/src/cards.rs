use crate::TokenKind;
use serde::{Deserialize, Serialize};

/// Visibility state of one card. `Matched` is terminal; `Open` falls back
/// to `Hidden` when the pair does not match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardState {
    Hidden,
    Open,
    Matched,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub token: TokenKind,
    pub state: CardState,
}

impl Card {
    pub fn hidden(id: u32, token: TokenKind) -> Self {
        Self {
            id,
            token,
            state: CardState::Hidden,
        }
    }

    pub fn is_face_up(&self) -> bool {
        matches!(self.state, CardState::Open | CardState::Matched)
    }

    pub fn is_resolved(&self) -> bool {
        self.state == CardState::Matched
    }
}
