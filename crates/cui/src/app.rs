use crate::script::ScriptedAction;
use anyhow::Result;
use memoria_core::{
    Event, EventBus, FlipOutcome, GameConfig, PairCount, Session,
};
use std::collections::VecDeque;
use std::time::Duration;

const MAX_EVENT_LOG: usize = 200;

pub struct App {
    pub session: Session,
    pub events: EventBus,
    pub cursor: usize,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(config: GameConfig, pairs: PairCount, seed: u64) -> Result<Self> {
        let session = Session::new(config, pairs, seed)?;
        Ok(Self {
            session,
            events: EventBus::default(),
            cursor: 0,
            event_log: VecDeque::new(),
            status_line: "ready".to_string(),
            show_help: false,
            should_quit: false,
        })
    }

    pub fn on_tick(&mut self, dt: Duration) {
        self.session.tick(dt, &mut self.events);
        self.flush_events();
    }

    /// Board columns per difficulty: 12 cards as 4x3, 16 as 4x4, 20 as 5x4.
    pub fn grid_cols(&self) -> usize {
        match self.session.pairs {
            PairCount::Six | PairCount::Eight => 4,
            PairCount::Ten => 5,
        }
    }

    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let len = self.session.deck.len();
        if len == 0 {
            return;
        }
        let cols = self.grid_cols() as isize;
        let next = self.cursor as isize + dx + dy * cols;
        if (0..len as isize).contains(&next) {
            self.cursor = next as usize;
        }
    }

    pub fn flip_at_cursor(&mut self) {
        let Some(card) = self.session.deck.cards.get(self.cursor) else {
            return;
        };
        let id = card.id;
        let outcome = self.session.flip(id, &mut self.events);
        self.status_line = match outcome {
            FlipOutcome::Ignored => {
                if self.session.is_locked() {
                    "locked: wait for the cooldown".to_string()
                } else {
                    "nothing to flip there".to_string()
                }
            }
            FlipOutcome::Opened => format!("card {id} opened"),
            FlipOutcome::MatchPending => "pair found".to_string(),
            FlipOutcome::MismatchPending => "no match".to_string(),
        };
        self.flush_events();
    }

    pub fn start_or_pause(&mut self) {
        if self.session.clock.is_running() {
            self.pause();
        } else {
            self.session.start(&mut self.events);
            self.status_line = "running".to_string();
            self.flush_events();
        }
    }

    pub fn pause(&mut self) {
        self.session.pause(&mut self.events);
        self.status_line = "paused".to_string();
        self.flush_events();
    }

    pub fn reset_current(&mut self) {
        self.reset_with_pairs(self.session.pairs);
    }

    pub fn reset_with_pairs(&mut self, pairs: PairCount) {
        self.session.reset(pairs, &mut self.events);
        self.cursor = 0;
        self.status_line = format!("new deck: {} pairs", pairs.pairs());
        self.flush_events();
    }

    pub fn hud_moves(&self) -> String {
        self.session.moves().to_string()
    }

    pub fn hud_time(&self) -> String {
        format_seconds(self.session.elapsed())
    }

    pub fn hud_best(&self) -> String {
        match self.session.best_time() {
            Some(best) => format_seconds(best),
            None => "—".to_string(),
        }
    }

    pub fn auto_perform_actions(&mut self, actions: &[ScriptedAction]) -> Result<(), String> {
        for action in actions {
            match action.action.as_str() {
                "flip" => {
                    let id = action.card.ok_or("flip action needs a card id")?;
                    self.session.flip(id, &mut self.events);
                }
                "start" => self.session.start(&mut self.events),
                "pause" => self.session.pause(&mut self.events),
                "reset" => {
                    let pairs = match action.pairs {
                        Some(raw) => PairCount::from_pairs(raw)
                            .ok_or_else(|| format!("unsupported pair count {raw}"))?,
                        None => self.session.pairs,
                    };
                    self.session.reset(pairs, &mut self.events);
                }
                "tick" => {
                    let millis = action.millis.ok_or("tick action needs millis")?;
                    self.session
                        .tick(Duration::from_millis(millis), &mut self.events);
                }
                other => return Err(format!("unknown scripted action '{other}'")),
            }
        }
        self.flush_events();
        Ok(())
    }

    pub fn flush_events(&mut self) {
        let lines: Vec<String> = self.events.drain().map(|event| format_event(&event)).collect();
        for line in lines {
            self.push_event_line(line);
        }
    }

    fn push_event_line(&mut self, line: String) {
        self.event_log.push_back(line);
        while self.event_log.len() > MAX_EVENT_LOG {
            self.event_log.pop_front();
        }
    }
}

pub fn format_seconds(time: Duration) -> String {
    format!("{}s", time.as_secs())
}

fn format_event(event: &Event) -> String {
    match event {
        Event::SessionStarted => "clock started".to_string(),
        Event::SessionPaused => "paused".to_string(),
        Event::SessionReset { pairs } => {
            format!("reset: {} pairs, {} cards", pairs.pairs(), pairs.deck_len())
        }
        Event::CardOpened { id, token } => format!("card {id} opened ({})", token.key()),
        Event::PairMatched { token, moves } => {
            format!("matched {} (move {moves})", token.key())
        }
        Event::PairMissed {
            first,
            second,
            moves,
        } => format!("missed: {} vs {} (move {moves})", first.key(), second.key()),
        Event::CardsHidden => "cards hidden again".to_string(),
        Event::SessionWon {
            time,
            moves,
            best,
            improved,
        } => {
            let best_note = if *improved {
                "new best".to_string()
            } else {
                format!("best {}", format_seconds(*best))
            };
            format!(
                "won in {} with {moves} moves ({best_note})",
                format_seconds(*time)
            )
        }
    }
}
