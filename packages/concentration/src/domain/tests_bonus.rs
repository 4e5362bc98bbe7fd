//! Unit tests for bonus-time accounting, on simulated time.

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::card::Card;
use crate::domain::state::GameState;

const LIMIT: Duration = Duration::from_secs(6);

fn t(secs: u64) -> Duration {
    Duration::from_secs(secs)
}

fn open_card() -> Card<char> {
    let mut card = Card::new(0, 'A', LIMIT);
    card.is_face_up = true;
    card
}

#[test]
fn remaining_decreases_while_consuming() {
    let mut card = open_card();
    card.start_using_bonus_time(t(0));

    assert_eq!(card.bonus_time_remaining(t(0)), t(6));
    assert_eq!(card.bonus_time_remaining(t(2)), t(4));
    assert_eq!(card.bonus_time_remaining(t(6)), t(0));
    assert_eq!(card.bonus_time_remaining(t(9)), t(0));

    assert!((card.bonus_fraction_remaining(t(2)) - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(card.bonus_fraction_remaining(t(6)), 0.0);
    assert_eq!(card.bonus_fraction_remaining(t(9)), 0.0);
}

#[test]
fn consuming_stops_at_exhaustion() {
    let mut card = open_card();
    card.start_using_bonus_time(t(0));

    assert!(card.is_consuming_bonus_time(t(5)));
    assert!(!card.is_consuming_bonus_time(t(6)));
    assert!(!card.is_consuming_bonus_time(t(100)));
}

#[test]
fn pause_and_resume_neither_loses_nor_double_counts() {
    let mut card = open_card();
    card.start_using_bonus_time(t(0));
    card.stop_using_bonus_time(t(2));

    // Off the clock between t=2 and t=5.
    assert_eq!(card.face_up_time(t(5)), t(2));

    card.start_using_bonus_time(t(5));
    assert_eq!(card.face_up_time(t(7)), t(4));
    assert_eq!(card.bonus_time_remaining(t(7)), t(2));
}

#[test]
fn start_is_idempotent() {
    let mut card = open_card();
    card.start_using_bonus_time(t(0));
    card.start_using_bonus_time(t(3));

    // The open interval still dates from t=0.
    assert_eq!(card.face_up_time(t(4)), t(4));
}

#[test]
fn stop_is_idempotent() {
    let mut card = open_card();
    card.start_using_bonus_time(t(0));
    card.stop_using_bonus_time(t(2));
    card.stop_using_bonus_time(t(5));

    assert_eq!(card.face_up_time(t(5)), t(2));
}

#[test]
fn start_after_exhaustion_opens_no_interval() {
    let mut card = open_card();
    card.start_using_bonus_time(t(0));
    card.stop_using_bonus_time(t(6));

    card.start_using_bonus_time(t(7));
    assert_eq!(card.face_up_time(t(10)), t(6));
    assert!(!card.is_consuming_bonus_time(t(10)));
}

#[test]
fn earned_bonus_requires_matching_inside_the_window() {
    let mut quick = open_card();
    quick.start_using_bonus_time(t(0));
    quick.stop_using_bonus_time(t(2));
    quick.is_matched = true;
    assert!(quick.has_earned_bonus(t(50)));

    let mut slow = open_card();
    slow.start_using_bonus_time(t(0));
    slow.stop_using_bonus_time(t(6));
    slow.is_matched = true;
    assert!(!slow.has_earned_bonus(t(50)));

    let unmatched = open_card();
    assert!(!unmatched.has_earned_bonus(t(0)));
}

// State-driven accounting: the flip boundaries inside `choose` are the only
// places intervals open and close.

fn new_game(pair_count: usize, seed: u64) -> GameState<char> {
    GameState::new(
        pair_count,
        LIMIT,
        |i| char::from(b'A' + i as u8),
        &mut ChaCha8Rng::seed_from_u64(seed),
    )
}

fn id_of(state: &GameState<char>, glyph: char) -> u32 {
    state
        .cards()
        .iter()
        .find(|c| *c.content() == glyph)
        .map(|c| c.id())
        .unwrap()
}

#[test]
fn revealed_card_consumes_until_matched() {
    let mut state = new_game(2, 21);
    let a = id_of(&state, 'A');

    state.choose(a, t(1));
    assert!(state.card(a).unwrap().is_consuming_bonus_time(t(2)));
    assert_eq!(state.card(a).unwrap().bonus_time_remaining(t(3)), t(4));

    state.choose(a ^ 1, t(3));

    // The first card's window froze with two seconds spent.
    let first = state.card(a).unwrap();
    assert!(!first.is_consuming_bonus_time(t(3)));
    assert_eq!(first.bonus_time_remaining(t(100)), t(4));
    assert!(first.has_earned_bonus(t(100)));

    // Its partner was face-up only for the instant of the match.
    let second = state.card(a ^ 1).unwrap();
    assert_eq!(second.bonus_time_remaining(t(100)), t(6));
    assert!(second.has_earned_bonus(t(100)));
    assert!(!second.is_consuming_bonus_time(t(100)));
}

#[test]
fn mismatched_cards_consume_simultaneously_until_flipped_down() {
    let mut state = new_game(3, 21);
    let a = id_of(&state, 'A');
    let b = id_of(&state, 'B');
    let c = id_of(&state, 'C');

    state.choose(a, t(0));
    state.choose(b, t(1));

    assert!(state.card(a).unwrap().is_consuming_bonus_time(t(2)));
    assert!(state.card(b).unwrap().is_consuming_bonus_time(t(2)));

    state.choose(c, t(4));

    // Flip-down folded their open intervals: A ran 0..4, B ran 1..4.
    let card_a = state.card(a).unwrap();
    let card_b = state.card(b).unwrap();
    assert!(!card_a.is_consuming_bonus_time(t(4)));
    assert!(!card_b.is_consuming_bonus_time(t(4)));
    assert_eq!(card_a.face_up_time(t(10)), t(4));
    assert_eq!(card_b.face_up_time(t(10)), t(3));

    assert!(state.card(c).unwrap().is_consuming_bonus_time(t(5)));
}

#[test]
fn reflipping_a_card_resumes_its_spent_window() {
    let mut state = new_game(3, 21);
    let a = id_of(&state, 'A');
    let b = id_of(&state, 'B');
    let c = id_of(&state, 'C');

    state.choose(a, t(0));
    state.choose(b, t(2));
    state.choose(c, t(4));

    // A already spent 4 of its 6 seconds; revealing it again resumes there.
    state.choose(a, t(10));
    let card_a = state.card(a).unwrap();
    assert_eq!(card_a.bonus_time_remaining(t(10)), t(2));
    assert!(card_a.is_consuming_bonus_time(t(11)));
    assert_eq!(card_a.bonus_time_remaining(t(12)), t(0));
    assert!(!card_a.is_consuming_bonus_time(t(12)));
}
