// Proptest generators for decks and intent sequences.

use proptest::prelude::*;

use crate::domain::card::CardId;

/// Deck sizes worth exercising, including the degenerate empty deck.
pub fn pair_count() -> impl Strategy<Value = usize> {
    0usize..=8
}

/// Card ids for a deck of `pair_count` pairs, ranging a little past the deck
/// so sequences also exercise the unknown-id no-op.
fn card_id(pair_count: usize) -> impl Strategy<Value = CardId> {
    let deck_len = (pair_count * 2) as CardId;
    0..(deck_len.max(1) + 2)
}

/// A deck size together with a random choose-intent sequence against it.
pub fn choose_sequence() -> impl Strategy<Value = (usize, Vec<CardId>)> {
    pair_count().prop_flat_map(|n| {
        proptest::collection::vec(card_id(n), 0..40).prop_map(move |ids| (n, ids))
    })
}
