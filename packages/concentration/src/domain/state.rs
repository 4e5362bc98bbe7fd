//! Game state container and the choose/match rules.

use std::time::Duration;

use rand::Rng;

use crate::domain::card::{Card, CardId};
use crate::domain::deck;

/// Entire game container, sufficient for pure domain operations.
///
/// One instance is built per game session and replaced wholesale on restart;
/// cards never migrate between decks. All mutation goes through [`choose`]
/// and [`shuffle`]; readers get an immutable slice.
///
/// [`choose`]: GameState::choose
/// [`shuffle`]: GameState::shuffle
#[derive(Debug, Clone, PartialEq)]
pub struct GameState<C> {
    cards: Vec<Card<C>>,
}

impl<C: Clone + PartialEq> GameState<C> {
    /// Build a freshly shuffled deck of `pair_count` pairs.
    ///
    /// No card starts face-up or matched. A zero pair count yields an empty
    /// deck on which every operation is a safe no-op.
    pub fn new<F, R>(
        pair_count: usize,
        bonus_time_limit: Duration,
        content_at: F,
        rng: &mut R,
    ) -> Self
    where
        F: Fn(usize) -> C,
        R: Rng,
    {
        let mut cards = deck::build_deck(pair_count, bonus_time_limit, content_at);
        deck::shuffle_cards(&mut cards, rng);
        Self { cards }
    }

    /// Ordered view of the deck. The order is the play/layout order and is
    /// significant to consumers.
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    /// Look up a card by id.
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// The flip slot: index of the single face-up unmatched card, when
    /// exactly one exists.
    ///
    /// After a mismatch two cards sit face-up unmatched at once and the slot
    /// reads empty; the next successful choose then flips both down. This is
    /// a pure derivation over the sequence, never cached.
    fn sole_face_up_unmatched(&self) -> Option<usize> {
        let mut face_up = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_face_up && !c.is_matched);
        match (face_up.next(), face_up.next()) {
            (Some((index, _)), None) => Some(index),
            _ => None,
        }
    }

    /// Reveal the card with id `id` at time `now`.
    ///
    /// Unknown ids and already-revealed or matched cards are no-ops. If
    /// exactly one other unmatched card is face-up, the chosen card is
    /// compared against it and both are marked matched on equal content;
    /// on a mismatch both stay visibly flipped until a later choose with an
    /// empty flip slot turns them back down. Matched pairs remain face-up
    /// for the rest of the game.
    pub fn choose(&mut self, id: CardId, now: Duration) {
        let Some(chosen) = self.cards.iter().position(|c| c.id == id) else {
            return;
        };
        if self.cards[chosen].is_face_up || self.cards[chosen].is_matched {
            return;
        }

        if let Some(candidate) = self.sole_face_up_unmatched() {
            if self.cards[candidate].content == self.cards[chosen].content {
                self.cards[candidate].is_matched = true;
                self.cards[chosen].is_matched = true;
                self.cards[candidate].stop_using_bonus_time(now);
            }
            self.cards[chosen].is_face_up = true;
            // A no-op when the pair just matched: matched cards do not consume.
            self.cards[chosen].start_using_bonus_time(now);
        } else {
            // Empty flip slot: turn down whatever is still open from the
            // previous turn, then the chosen card becomes the sole occupant.
            for card in &mut self.cards {
                if card.is_face_up && !card.is_matched {
                    card.stop_using_bonus_time(now);
                    card.is_face_up = false;
                }
            }
            let card = &mut self.cards[chosen];
            card.is_face_up = true;
            card.start_using_bonus_time(now);
        }
    }

    /// Reorder the deck uniformly at random. Card flags are untouched.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        deck::shuffle_cards(&mut self.cards, rng);
    }
}
