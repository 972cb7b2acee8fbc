use memoria_core::{CardState, Deck, PairCount, RngState, TokenKind};
use std::collections::HashMap;

macro_rules! pair_case {
    ($name:ident, $pairs:expr) => {
        #[test]
        fn $name() {
            let mut rng = RngState::from_seed(7);
            let deck = Deck::build($pairs, &mut rng);
            assert_eq!(deck.len(), $pairs.deck_len());

            let mut counts: HashMap<TokenKind, usize> = HashMap::new();
            for card in &deck.cards {
                assert_eq!(card.state, CardState::Hidden);
                *counts.entry(card.token).or_insert(0) += 1;
            }
            assert_eq!(counts.len(), $pairs.pairs());
            assert!(counts.values().all(|count| *count == 2));

            let mut ids: Vec<u32> = deck.cards.iter().map(|card| card.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), deck.len());
        }
    };
}

pair_case!(six_pairs_make_twelve_paired_cards, PairCount::Six);
pair_case!(eight_pairs_make_sixteen_paired_cards, PairCount::Eight);
pair_case!(ten_pairs_make_twenty_paired_cards, PairCount::Ten);

#[test]
fn same_seed_builds_same_layout() {
    let mut first_rng = RngState::from_seed(42);
    let mut second_rng = RngState::from_seed(42);
    let first = Deck::build(PairCount::Eight, &mut first_rng);
    let second = Deck::build(PairCount::Eight, &mut second_rng);
    let first_tokens: Vec<TokenKind> = first.cards.iter().map(|card| card.token).collect();
    let second_tokens: Vec<TokenKind> = second.cards.iter().map(|card| card.token).collect();
    assert_eq!(first_tokens, second_tokens);
}

#[test]
fn pair_count_round_trips_through_raw_values() {
    for pairs in PairCount::ALL {
        assert_eq!(PairCount::from_pairs(pairs.pairs()), Some(pairs));
    }
    assert_eq!(PairCount::from_pairs(0), None);
    assert_eq!(PairCount::from_pairs(7), None);
    assert_eq!(PairCount::from_pairs(12), None);
}

#[test]
fn fresh_deck_is_not_complete() {
    let mut rng = RngState::from_seed(3);
    let deck = Deck::build(PairCount::Six, &mut rng);
    assert!(!deck.is_complete());
    assert_eq!(deck.matched_count(), 0);
    assert_eq!(deck.open_count(), 0);
}

#[test]
fn empty_deck_is_not_complete() {
    assert!(!Deck::default().is_complete());
}
