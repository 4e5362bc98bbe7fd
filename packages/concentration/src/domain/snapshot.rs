//! Read-only snapshots for observing game state without exposing internals.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::card::CardId;
use crate::domain::state::GameState;

/// Public facts about a single card at one instant, with the time-derived
/// fields already evaluated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView<C> {
    pub id: CardId,
    pub content: C,
    pub is_face_up: bool,
    pub is_matched: bool,
    pub bonus_time_remaining: Duration,
    pub bonus_fraction_remaining: f64,
    pub is_consuming_bonus_time: bool,
    pub has_earned_bonus: bool,
}

/// Full deck snapshot in play order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot<C> {
    pub cards: Vec<CardView<C>>,
}

/// Capture the deck at `now`. The result is owned data; mutating it cannot
/// touch the live state.
pub fn snapshot<C: Clone + PartialEq>(state: &GameState<C>, now: Duration) -> GameSnapshot<C> {
    GameSnapshot {
        cards: state
            .cards()
            .iter()
            .map(|card| CardView {
                id: card.id(),
                content: card.content().clone(),
                is_face_up: card.is_face_up(),
                is_matched: card.is_matched(),
                bonus_time_remaining: card.bonus_time_remaining(now),
                bonus_fraction_remaining: card.bonus_fraction_remaining(now),
                is_consuming_bonus_time: card.is_consuming_bonus_time(now),
                has_earned_bonus: card.has_earned_bonus(now),
            })
            .collect(),
    }
}
