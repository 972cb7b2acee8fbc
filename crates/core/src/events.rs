use crate::{PairCount, TokenKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    SessionStarted,
    SessionPaused,
    SessionReset { pairs: PairCount },
    CardOpened { id: u32, token: TokenKind },
    PairMatched { token: TokenKind, moves: u32 },
    PairMissed {
        first: TokenKind,
        second: TokenKind,
        moves: u32,
    },
    CardsHidden,
    SessionWon {
        time: Duration,
        moves: u32,
        best: Duration,
        improved: bool,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
