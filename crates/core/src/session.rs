use crate::{
    CardState, ConfigError, Deck, Event, EventBus, GameConfig, PairCount, RngState, SessionClock,
    TokenKind,
};
use std::time::Duration;

/// Result of a `flip` call. Out-of-window input is a defined no-op, not an
/// error; frontends only use this to phrase the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Rejected: locked, already won, unknown id, card already face up, or
    /// two cards are open with a resolution pending.
    Ignored,
    /// Card turned face up; waiting for its partner.
    Opened,
    /// Second card completed a matching pair; the commit is scheduled.
    MatchPending,
    /// Second card completed a mismatched pair; the revert is scheduled
    /// and input is locked until it lands.
    MismatchPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Match { token: TokenKind },
    Mismatch,
}

/// A scheduled delayed transition. Tied to the session generation so a
/// resolution scheduled before a reset can never touch the fresh deck.
#[derive(Debug, Clone, Copy)]
struct PendingResolution {
    resolution: Resolution,
    remaining: Duration,
    generation: u64,
}

/// One play-through from deck creation to win or abandonment. All state
/// transitions happen on discrete inputs (`flip`, `start`, `pause`,
/// `reset`) or on `tick`; there is no hidden time source.
#[derive(Debug)]
pub struct Session {
    pub config: GameConfig,
    pub rng: RngState,
    pub deck: Deck,
    pub clock: SessionClock,
    pub pairs: PairCount,
    moves: u32,
    locked: bool,
    won: bool,
    best_time: Option<Duration>,
    pending: Option<PendingResolution>,
    generation: u64,
}

impl Session {
    pub fn new(config: GameConfig, pairs: PairCount, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = RngState::from_seed(seed);
        let deck = Deck::build(pairs, &mut rng);
        Ok(Self {
            config,
            rng,
            deck,
            clock: SessionClock::default(),
            pairs,
            moves: 0,
            locked: false,
            won: false,
            best_time: None,
            pending: None,
            generation: 0,
        })
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn best_time(&self) -> Option<Duration> {
        self.best_time
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    pub fn start(&mut self, events: &mut EventBus) {
        if self.won || self.clock.is_running() {
            return;
        }
        self.clock.start();
        events.push(Event::SessionStarted);
    }

    pub fn pause(&mut self, events: &mut EventBus) {
        if !self.clock.is_running() {
            return;
        }
        self.clock.pause();
        events.push(Event::SessionPaused);
    }

    /// Fresh shuffle, all cards hidden, counters zeroed. Best time survives
    /// because it spans sessions within one process lifetime. Any pending
    /// resolution is discarded here, before the new deck exists.
    pub fn reset(&mut self, pairs: PairCount, events: &mut EventBus) {
        self.generation += 1;
        self.pending = None;
        self.locked = false;
        self.won = false;
        self.moves = 0;
        self.clock.reset();
        self.pairs = pairs;
        self.deck = Deck::build(pairs, &mut self.rng);
        events.push(Event::SessionReset { pairs });
    }

    pub fn flip(&mut self, id: u32, events: &mut EventBus) -> FlipOutcome {
        if self.locked || self.won {
            return FlipOutcome::Ignored;
        }
        // A third flip must never be evaluated against a committed pair.
        if self.deck.open_count() >= 2 {
            return FlipOutcome::Ignored;
        }
        let Some(card) = self.deck.card(id) else {
            return FlipOutcome::Ignored;
        };
        if card.state != CardState::Hidden {
            return FlipOutcome::Ignored;
        }

        // Flipping is an implicit start: the clock runs from the first
        // valid flip of an idle or paused session.
        if !self.clock.is_running() {
            self.clock.start();
            events.push(Event::SessionStarted);
        }

        let token = card.token;
        if let Some(card) = self.deck.card_mut(id) {
            card.state = CardState::Open;
        }
        events.push(Event::CardOpened { id, token });

        let open = self.deck.open_cards();
        debug_assert!(open.len() <= 2);
        if open.len() < 2 {
            return FlipOutcome::Opened;
        }

        // One move per completed two-card evaluation, match or not.
        self.moves += 1;
        let (first, second) = (open[0], open[1]);
        if first.token == second.token {
            self.pending = Some(PendingResolution {
                resolution: Resolution::Match { token: first.token },
                remaining: self.config.match_confirm,
                generation: self.generation,
            });
            events.push(Event::PairMatched {
                token: first.token,
                moves: self.moves,
            });
            FlipOutcome::MatchPending
        } else {
            self.locked = true;
            self.pending = Some(PendingResolution {
                resolution: Resolution::Mismatch,
                remaining: self.config.mismatch_cooldown,
                generation: self.generation,
            });
            events.push(Event::PairMissed {
                first: first.token,
                second: second.token,
                moves: self.moves,
            });
            FlipOutcome::MismatchPending
        }
    }

    /// Advance session time. Drives the clock and counts down the pending
    /// resolution, applying it once due.
    pub fn tick(&mut self, dt: Duration, events: &mut EventBus) {
        self.clock.tick(dt);
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        if pending.generation != self.generation {
            // Stale schedule from before a reset; never apply it.
            self.pending = None;
            return;
        }
        if dt < pending.remaining {
            pending.remaining -= dt;
            return;
        }
        let resolution = pending.resolution;
        self.pending = None;
        match resolution {
            Resolution::Match { token } => {
                for card in self
                    .deck
                    .cards
                    .iter_mut()
                    .filter(|card| card.token == token)
                {
                    card.state = CardState::Matched;
                }
                self.check_win(events);
            }
            Resolution::Mismatch => {
                for card in self
                    .deck
                    .cards
                    .iter_mut()
                    .filter(|card| card.state == CardState::Open)
                {
                    card.state = CardState::Hidden;
                }
                self.locked = false;
                events.push(Event::CardsHidden);
            }
        }
    }

    fn check_win(&mut self, events: &mut EventBus) {
        // `won` guards idempotence: one clock stop and one best-time
        // candidate per winning transition.
        if self.won || !self.deck.is_complete() {
            return;
        }
        self.won = true;
        self.clock.pause();
        let time = self.clock.elapsed();
        let improved = self.best_time.map_or(true, |best| time < best);
        if improved {
            self.best_time = Some(time);
        }
        let best = self.best_time.unwrap_or(time);
        events.push(Event::SessionWon {
            time,
            moves: self.moves,
            best,
            improved,
        });
    }
}
