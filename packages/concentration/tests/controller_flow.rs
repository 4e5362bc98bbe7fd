//! Integration tests for controller intents, notifications, and snapshots.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use concentration::{
    CardView, GameConfig, GameController, ManualClock, Theme, DEFAULT_BONUS_TIME_LIMIT,
};

const CONTENTS: [&str; 6] = ["owl", "fox", "frog", "moon", "gear", "star"];

fn seeded_controller(pair_count: usize, seed: u64) -> GameController<&'static str> {
    GameController::new(
        GameConfig::new(pair_count).with_rng_seed(seed),
        |i| CONTENTS[i],
    )
    .unwrap()
}

fn card_ids(cards: &[CardView<&'static str>]) -> Vec<u32> {
    cards.iter().map(|c| c.id).collect()
}

#[test]
fn every_intent_notifies_even_on_noops() {
    let mut controller = seeded_controller(3, 1);
    let notifications = Rc::new(RefCell::new(0usize));
    let observed = Rc::clone(&notifications);
    controller.subscribe(move || *observed.borrow_mut() += 1);

    let first_id = controller.cards()[0].id;
    controller.choose(first_id);
    // Unknown id and re-tap are in-state no-ops but must still notify.
    controller.choose(999);
    controller.choose(first_id);
    controller.shuffle();
    controller.restart();

    assert_eq!(*notifications.borrow(), 5);
}

#[test]
fn restart_replaces_the_deck_wholesale() {
    let mut controller = seeded_controller(4, 2);

    let first_id = controller.cards()[0].id;
    controller.choose(first_id);
    // Partner ids differ only in the low bit.
    controller.choose(first_id ^ 1);
    assert!(controller.cards().iter().any(|c| c.is_matched));

    controller.restart();
    let cards = controller.cards();
    assert_eq!(cards.len(), 8);
    assert!(cards.iter().all(|c| !c.is_face_up && !c.is_matched));
    assert!(cards
        .iter()
        .all(|c| c.bonus_time_remaining == DEFAULT_BONUS_TIME_LIMIT));
}

#[test]
fn seeded_sessions_reproduce_deck_order() {
    let mut a = seeded_controller(5, 42);
    let mut b = seeded_controller(5, 42);
    assert_eq!(card_ids(&a.cards()), card_ids(&b.cards()));

    a.shuffle();
    b.shuffle();
    assert_eq!(card_ids(&a.cards()), card_ids(&b.cards()));

    a.restart();
    b.restart();
    assert_eq!(card_ids(&a.cards()), card_ids(&b.cards()));
}

#[test]
fn snapshots_are_detached_from_live_state() {
    let controller = seeded_controller(3, 3);

    let mut cards = controller.cards();
    cards[0].is_face_up = true;
    cards.remove(1);

    let fresh = controller.cards();
    assert_eq!(fresh.len(), 6);
    assert!(fresh.iter().all(|c| !c.is_face_up));
}

#[test]
fn bonus_fraction_declines_on_the_injected_clock() {
    let clock = Arc::new(ManualClock::new());
    let mut controller = GameController::with_clock(
        GameConfig::new(3).with_rng_seed(4),
        |i| CONTENTS[i],
        clock.clone(),
    )
    .unwrap();

    let id = controller.cards()[0].id;
    controller.choose(id);

    let at_flip = controller
        .cards()
        .into_iter()
        .find(|c| c.id == id)
        .unwrap();
    assert!(at_flip.is_consuming_bonus_time);
    assert_eq!(at_flip.bonus_fraction_remaining, 1.0);

    clock.advance(Duration::from_secs(3));
    let halfway = controller
        .cards()
        .into_iter()
        .find(|c| c.id == id)
        .unwrap();
    assert!((halfway.bonus_fraction_remaining - 0.5).abs() < 1e-9);

    clock.advance(Duration::from_secs(4));
    let exhausted = controller
        .cards()
        .into_iter()
        .find(|c| c.id == id)
        .unwrap();
    assert_eq!(exhausted.bonus_fraction_remaining, 0.0);
    assert!(!exhausted.is_consuming_bonus_time);
}

#[test]
fn matching_inside_the_window_earns_the_bonus() {
    let clock = Arc::new(ManualClock::new());
    let mut controller = GameController::with_clock(
        GameConfig::new(3).with_rng_seed(5),
        |i| CONTENTS[i],
        clock.clone(),
    )
    .unwrap();

    let id = controller.cards()[0].id;
    controller.choose(id);
    clock.advance(Duration::from_secs(2));
    controller.choose(id ^ 1);

    clock.advance(Duration::from_secs(60));
    let pair: Vec<CardView<&'static str>> = controller
        .cards()
        .into_iter()
        .filter(|c| c.id == id || c.id == id ^ 1)
        .collect();
    assert_eq!(pair.len(), 2);
    for card in pair {
        assert!(card.is_matched);
        assert!(card.has_earned_bonus);
        assert!(!card.is_consuming_bonus_time);
    }
}

#[test]
fn zero_bonus_limit_is_rejected_at_construction() {
    let config = GameConfig::new(3).with_bonus_time_limit(Duration::ZERO);
    assert!(GameController::new(config, |i| CONTENTS[i]).is_err());
}

#[test]
fn empty_deck_controller_is_safe() {
    let mut controller = seeded_controller(0, 6);
    controller.choose(0);
    controller.shuffle();
    controller.restart();
    assert!(controller.cards().is_empty());
}

#[test]
fn themed_controller_deals_one_pair_per_glyph() {
    let theme = Theme::classic();
    let pair_count = theme.pair_count();
    let controller = GameController::from_theme(theme).unwrap();

    let cards = controller.cards();
    assert_eq!(cards.len(), pair_count * 2);
    for card in &cards {
        let partner = cards.iter().find(|c| c.id == card.id ^ 1).unwrap();
        assert_eq!(partner.content, card.content);
    }
}
