use memoria_core::{
    CardState, Event, EventBus, FlipOutcome, GameConfig, PairCount, Session, TokenKind,
};
use std::collections::HashMap;
use std::time::Duration;

const SEED: u64 = 0xFEED;

fn new_session(pairs: PairCount) -> (Session, EventBus) {
    let session = Session::new(GameConfig::default(), pairs, SEED).expect("default config");
    (session, EventBus::default())
}

fn matching_pair(session: &Session) -> (u32, u32) {
    let hidden: Vec<_> = session
        .deck
        .cards
        .iter()
        .filter(|card| card.state == CardState::Hidden)
        .collect();
    for (idx, first) in hidden.iter().enumerate() {
        for second in &hidden[idx + 1..] {
            if first.token == second.token {
                return (first.id, second.id);
            }
        }
    }
    unreachable!("a hidden pair remains");
}

fn mismatched_pair(session: &Session) -> (u32, u32) {
    let hidden: Vec<_> = session
        .deck
        .cards
        .iter()
        .filter(|card| card.state == CardState::Hidden)
        .collect();
    for (idx, first) in hidden.iter().enumerate() {
        for second in &hidden[idx + 1..] {
            if first.token != second.token {
                return (first.id, second.id);
            }
        }
    }
    unreachable!("two hidden tokens remain");
}

fn ids_by_token(session: &Session) -> HashMap<TokenKind, Vec<u32>> {
    let mut grouped: HashMap<TokenKind, Vec<u32>> = HashMap::new();
    for card in &session.deck.cards {
        grouped.entry(card.token).or_default().push(card.id);
    }
    grouped
}

fn state_of(session: &Session, id: u32) -> CardState {
    session.deck.card(id).expect("card exists").state
}

fn play_to_win(session: &mut Session, events: &mut EventBus, step: Duration) {
    for ids in ids_by_token(session).into_values() {
        assert_eq!(session.flip(ids[0], events), FlipOutcome::Opened);
        assert_eq!(session.flip(ids[1], events), FlipOutcome::MatchPending);
        session.tick(step, events);
    }
}

#[test]
fn match_commits_after_confirmation_delay() {
    let (mut session, mut events) = new_session(PairCount::Six);
    let (first, second) = matching_pair(&session);

    assert_eq!(session.flip(first, &mut events), FlipOutcome::Opened);
    assert!(session.clock.is_running());
    assert_eq!(session.flip(second, &mut events), FlipOutcome::MatchPending);
    assert_eq!(session.moves(), 1);
    assert!(!session.is_locked());
    assert_eq!(state_of(&session, first), CardState::Open);
    assert_eq!(state_of(&session, second), CardState::Open);

    session.tick(session.config.match_confirm, &mut events);
    assert_eq!(state_of(&session, first), CardState::Matched);
    assert_eq!(state_of(&session, second), CardState::Matched);
    assert!(!session.is_locked());
}

#[test]
fn mismatch_locks_then_reverts_after_cooldown() {
    let (mut session, mut events) = new_session(PairCount::Six);
    let (first, second) = mismatched_pair(&session);

    session.flip(first, &mut events);
    assert_eq!(session.flip(second, &mut events), FlipOutcome::MismatchPending);
    assert_eq!(session.moves(), 1);
    assert!(session.is_locked());

    // Input is rejected for the whole cooldown window.
    let (_, third) = matching_pair(&session);
    assert_eq!(session.flip(third, &mut events), FlipOutcome::Ignored);

    session.tick(Duration::from_millis(600), &mut events);
    assert_eq!(state_of(&session, first), CardState::Open);
    assert!(session.is_locked());

    session.tick(Duration::from_millis(50), &mut events);
    assert_eq!(state_of(&session, first), CardState::Hidden);
    assert_eq!(state_of(&session, second), CardState::Hidden);
    assert!(!session.is_locked());
}

#[test]
fn never_more_than_two_cards_open() {
    let (mut session, mut events) = new_session(PairCount::Ten);
    let ids: Vec<u32> = session.deck.cards.iter().map(|card| card.id).collect();
    for id in ids {
        session.flip(id, &mut events);
        assert!(session.deck.open_count() <= 2);
    }
}

#[test]
fn moves_count_completed_evaluations_only() {
    let (mut session, mut events) = new_session(PairCount::Six);

    let (first, second) = matching_pair(&session);
    session.flip(first, &mut events);
    assert_eq!(session.moves(), 0);
    session.flip(second, &mut events);
    assert_eq!(session.moves(), 1);
    session.tick(session.config.match_confirm, &mut events);

    let (first, second) = mismatched_pair(&session);
    session.flip(first, &mut events);
    session.flip(second, &mut events);
    assert_eq!(session.moves(), 2);
    session.tick(session.config.mismatch_cooldown, &mut events);
    assert_eq!(session.moves(), 2);
}

#[test]
fn flip_rejects_resolved_unknown_and_repeated_cards() {
    let (mut session, mut events) = new_session(PairCount::Six);
    assert_eq!(session.flip(9999, &mut events), FlipOutcome::Ignored);

    let (first, second) = matching_pair(&session);
    session.flip(first, &mut events);
    assert_eq!(session.flip(first, &mut events), FlipOutcome::Ignored);

    session.flip(second, &mut events);
    session.tick(session.config.match_confirm, &mut events);
    assert_eq!(session.flip(first, &mut events), FlipOutcome::Ignored);
}

#[test]
fn winning_stops_clock_and_records_best_once() {
    let (mut session, mut events) = new_session(PairCount::Six);
    play_to_win(&mut session, &mut events, Duration::from_millis(200));

    assert!(session.is_won());
    assert!(!session.clock.is_running());
    let final_time = session.elapsed();
    assert_eq!(session.best_time(), Some(final_time));

    // Further ticks and flips are inert on a won session.
    session.tick(Duration::from_secs(5), &mut events);
    assert_eq!(session.elapsed(), final_time);
    let some_id = session.deck.cards[0].id;
    assert_eq!(session.flip(some_id, &mut events), FlipOutcome::Ignored);

    let wins = events
        .drain()
        .filter(|event| matches!(event, Event::SessionWon { .. }))
        .count();
    assert_eq!(wins, 1);
}

#[test]
fn best_time_is_minimum_across_sessions() {
    let (mut session, mut events) = new_session(PairCount::Six);
    play_to_win(&mut session, &mut events, Duration::from_millis(800));
    let slow = session.elapsed();
    assert_eq!(session.best_time(), Some(slow));

    session.reset(PairCount::Six, &mut events);
    assert_eq!(session.best_time(), Some(slow));
    play_to_win(&mut session, &mut events, Duration::from_millis(200));
    let fast = session.elapsed();
    assert!(fast < slow);
    assert_eq!(session.best_time(), Some(fast));

    session.reset(PairCount::Six, &mut events);
    play_to_win(&mut session, &mut events, Duration::from_millis(500));
    assert_eq!(session.best_time(), Some(fast));

    let improvements: Vec<bool> = events
        .drain()
        .filter_map(|event| match event {
            Event::SessionWon { improved, .. } => Some(improved),
            _ => None,
        })
        .collect();
    assert_eq!(improvements, vec![true, true, false]);
}

#[test]
fn reset_discards_pending_mismatch_resolution() {
    let (mut session, mut events) = new_session(PairCount::Six);
    let (first, second) = mismatched_pair(&session);
    session.flip(first, &mut events);
    session.flip(second, &mut events);
    assert!(session.is_locked());

    session.reset(PairCount::Eight, &mut events);
    assert_eq!(session.moves(), 0);
    assert!(!session.is_locked());
    assert_eq!(session.deck.len(), PairCount::Eight.deck_len());

    // The old cooldown must never mutate the fresh deck.
    session.tick(Duration::from_secs(2), &mut events);
    assert!(session
        .deck
        .cards
        .iter()
        .all(|card| card.state == CardState::Hidden));
}

#[test]
fn flip_resumes_a_paused_session() {
    let (mut session, mut events) = new_session(PairCount::Six);
    let (first, second) = matching_pair(&session);

    session.flip(first, &mut events);
    session.pause(&mut events);
    session.tick(Duration::from_secs(3), &mut events);
    assert_eq!(session.elapsed(), Duration::ZERO);

    assert_eq!(session.flip(second, &mut events), FlipOutcome::MatchPending);
    assert!(session.clock.is_running());
}

#[test]
fn explicit_start_and_pause_emit_events() {
    let (mut session, mut events) = new_session(PairCount::Six);
    session.start(&mut events);
    session.start(&mut events);
    session.pause(&mut events);
    session.pause(&mut events);
    let drained: Vec<Event> = events.drain().collect();
    assert_eq!(drained, vec![Event::SessionStarted, Event::SessionPaused]);
}
