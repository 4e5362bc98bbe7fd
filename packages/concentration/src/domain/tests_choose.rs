//! Unit tests for the choose/match rules.

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::card::CardId;
use crate::domain::state::GameState;

const LIMIT: Duration = Duration::from_secs(6);
const T0: Duration = Duration::ZERO;

fn content(pair_index: usize) -> char {
    char::from(b'A' + pair_index as u8)
}

fn new_game(pair_count: usize, seed: u64) -> GameState<char> {
    GameState::new(
        pair_count,
        LIMIT,
        content,
        &mut ChaCha8Rng::seed_from_u64(seed),
    )
}

/// First card (in play order) carrying `glyph`.
fn id_of(state: &GameState<char>, glyph: char) -> CardId {
    state
        .cards()
        .iter()
        .find(|c| *c.content() == glyph)
        .map(|c| c.id())
        .unwrap()
}

fn face_up_unmatched_count(state: &GameState<char>) -> usize {
    state
        .cards()
        .iter()
        .filter(|c| c.is_face_up() && !c.is_matched())
        .count()
}

#[test]
fn fresh_deck_is_all_face_down() {
    let state = new_game(4, 11);
    assert_eq!(state.cards().len(), 8);
    assert!(state
        .cards()
        .iter()
        .all(|c| !c.is_face_up() && !c.is_matched()));
}

#[test]
fn example_scenario_two_pairs() {
    // create(2, ["A","B"]) -> choose both A's, then both B's.
    let mut state = new_game(2, 11);

    let first_a = id_of(&state, 'A');
    state.choose(first_a, T0);
    assert!(state.card(first_a).unwrap().is_face_up());
    assert!(!state.card(first_a).unwrap().is_matched());
    assert_eq!(face_up_unmatched_count(&state), 1);

    // Partner ids differ by the low bit only.
    let second_a = first_a ^ 1;
    state.choose(second_a, T0);
    assert!(state.card(first_a).unwrap().is_matched());
    assert!(state.card(second_a).unwrap().is_matched());
    assert!(state.card(first_a).unwrap().is_face_up());
    assert!(state.card(second_a).unwrap().is_face_up());

    let first_b = id_of(&state, 'B');
    state.choose(first_b, T0);
    assert!(state.card(first_b).unwrap().is_face_up());
    assert!(!state.card(first_b).unwrap().is_matched());
    // Matched A's are untouched by the new flip.
    assert!(state.card(first_a).unwrap().is_face_up());
    assert!(state.card(second_a).unwrap().is_face_up());

    state.choose(first_b ^ 1, T0);
    assert!(state.cards().iter().all(|c| c.is_matched()));
    assert!(state.cards().iter().all(|c| c.is_face_up()));
}

#[test]
fn unknown_id_is_a_noop() {
    let mut state = new_game(3, 7);
    let before = state.clone();
    state.choose(999, T0);
    assert_eq!(state, before);
}

#[test]
fn choosing_same_card_twice_is_a_noop() {
    let mut state = new_game(3, 7);
    let a = id_of(&state, 'A');
    state.choose(a, T0);

    let before = state.clone();
    state.choose(a, T0);
    assert_eq!(state, before);
}

#[test]
fn choosing_a_matched_card_is_a_noop() {
    let mut state = new_game(3, 7);
    let a = id_of(&state, 'A');
    state.choose(a, T0);
    state.choose(a ^ 1, T0);
    assert!(state.card(a).unwrap().is_matched());

    let before = state.clone();
    state.choose(a, T0);
    assert_eq!(state, before);
    state.choose(a ^ 1, T0);
    assert_eq!(state, before);
}

#[test]
fn mismatch_leaves_both_cards_face_up() {
    let mut state = new_game(3, 7);
    let a = id_of(&state, 'A');
    let b = id_of(&state, 'B');

    state.choose(a, T0);
    state.choose(b, T0);

    // The "check your pair" window: both stay visibly flipped, unmatched.
    assert!(state.card(a).unwrap().is_face_up());
    assert!(state.card(b).unwrap().is_face_up());
    assert!(!state.card(a).unwrap().is_matched());
    assert!(!state.card(b).unwrap().is_matched());
    assert_eq!(face_up_unmatched_count(&state), 2);
}

#[test]
fn third_choose_flips_mismatch_back_down() {
    let mut state = new_game(3, 7);
    let a = id_of(&state, 'A');
    let b = id_of(&state, 'B');
    let c = id_of(&state, 'C');

    state.choose(a, T0);
    state.choose(b, T0);
    state.choose(c, T0);

    assert!(!state.card(a).unwrap().is_face_up());
    assert!(!state.card(b).unwrap().is_face_up());
    assert!(state.card(c).unwrap().is_face_up());
    assert_eq!(face_up_unmatched_count(&state), 1);
}

#[test]
fn flip_down_applies_even_when_third_card_would_match_an_open_one() {
    let mut state = new_game(3, 7);
    let a = id_of(&state, 'A');
    let b = id_of(&state, 'B');

    state.choose(a, T0);
    state.choose(b, T0);
    // Two cards are open, so the slot is empty; A's partner cannot pair with
    // the still-open A. It flips the mismatch down and stands alone.
    state.choose(a ^ 1, T0);

    assert!(!state.card(a).unwrap().is_matched());
    assert!(!state.card(a ^ 1).unwrap().is_matched());
    assert!(!state.card(a).unwrap().is_face_up());
    assert!(!state.card(b).unwrap().is_face_up());
    assert!(state.card(a ^ 1).unwrap().is_face_up());
    assert_eq!(face_up_unmatched_count(&state), 1);
}

#[test]
fn matched_pairs_survive_later_flip_downs() {
    let mut state = new_game(3, 7);
    let a = id_of(&state, 'A');
    let b = id_of(&state, 'B');
    let c = id_of(&state, 'C');

    state.choose(a, T0);
    state.choose(a ^ 1, T0);
    state.choose(b, T0);
    state.choose(c, T0);
    // B/C mismatch resolved by a fresh flip.
    state.choose(b ^ 1, T0);

    assert!(state.card(a).unwrap().is_face_up());
    assert!(state.card(a ^ 1).unwrap().is_face_up());
    assert!(state.card(a).unwrap().is_matched());
    assert!(state.card(a ^ 1).unwrap().is_matched());
}

#[test]
fn single_pair_deck_matches_immediately() {
    let mut state = new_game(1, 3);
    state.choose(0, T0);
    state.choose(1, T0);
    assert!(state.cards().iter().all(|c| c.is_matched()));
}

#[test]
fn empty_deck_operations_are_safe() {
    let mut state = new_game(0, 3);
    state.choose(0, T0);
    state.shuffle(&mut ChaCha8Rng::seed_from_u64(3));
    assert!(state.cards().is_empty());
}

#[test]
fn shuffle_keeps_flags_with_their_cards() {
    let mut state = new_game(4, 9);
    let a = id_of(&state, 'A');
    state.choose(a, T0);
    state.choose(a ^ 1, T0);

    let mut before: Vec<_> = state.cards().to_vec();
    before.sort_by_key(|c| c.id());

    state.shuffle(&mut ChaCha8Rng::seed_from_u64(77));

    let mut after: Vec<_> = state.cards().to_vec();
    after.sort_by_key(|c| c.id());
    assert_eq!(before, after);
}
