//! Deck construction and shuffling.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::card::{Card, CardId};

/// Build an unshuffled deck of `pair_count` content pairs.
///
/// Pair index `i` contributes two cards with ids `2i` and `2i + 1` sharing
/// the content returned by `content_at(i)`. The factory must be pure: it is
/// called once per pair, and equal contents are what match detection keys on.
pub fn build_deck<C, F>(pair_count: usize, bonus_time_limit: Duration, content_at: F) -> Vec<Card<C>>
where
    C: Clone,
    F: Fn(usize) -> C,
{
    let mut cards = Vec::with_capacity(pair_count * 2);
    for pair_index in 0..pair_count {
        let content = content_at(pair_index);
        cards.push(Card::new(
            (pair_index * 2) as CardId,
            content.clone(),
            bonus_time_limit,
        ));
        cards.push(Card::new(
            (pair_index * 2 + 1) as CardId,
            content,
            bonus_time_limit,
        ));
    }
    cards
}

/// Uniform in-place permutation. Flags and timing state travel with their
/// cards; only the order changes.
pub fn shuffle_cards<C, R: Rng>(cards: &mut [Card<C>], rng: &mut R) {
    cards.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn contents(pair_index: usize) -> char {
        char::from(b'a' + pair_index as u8)
    }

    #[test]
    fn build_deck_assigns_partner_ids() {
        let deck = build_deck(3, Duration::from_secs(6), contents);
        assert_eq!(deck.len(), 6);
        for card in &deck {
            let partner = deck.iter().find(|c| c.id() == card.id() ^ 1).unwrap();
            assert_eq!(partner.content(), card.content());
        }
    }

    #[test]
    fn build_deck_zero_pairs_is_empty() {
        let deck = build_deck(0, Duration::from_secs(6), contents);
        assert!(deck.is_empty());
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut a = build_deck(8, Duration::from_secs(6), contents);
        let mut b = build_deck(8, Duration::from_secs(6), contents);

        shuffle_cards(&mut a, &mut ChaCha8Rng::seed_from_u64(42));
        shuffle_cards(&mut b, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);

        let mut c = build_deck(8, Duration::from_secs(6), contents);
        shuffle_cards(&mut c, &mut ChaCha8Rng::seed_from_u64(43));
        assert_ne!(a, c);
    }

    #[test]
    fn shuffle_preserves_ids() {
        let mut deck = build_deck(5, Duration::from_secs(6), contents);
        shuffle_cards(&mut deck, &mut ChaCha8Rng::seed_from_u64(1));

        let mut ids: Vec<CardId> = deck.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..10).collect::<Vec<CardId>>());
    }
}
