//! Property-based tests for deck construction and shuffling.

use std::collections::HashSet;
use std::time::Duration;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::card::CardId;
use crate::domain::state::GameState;
use crate::domain::{test_gens, test_prelude};

const LIMIT: Duration = Duration::from_secs(6);

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: `create(n, f)` yields 2n cards, two per content, unique
    /// ids, none face-up or matched, all with a full bonus window.
    #[test]
    fn prop_deck_construction_shape(
        pair_count in test_gens::pair_count(),
        seed in any::<u64>(),
    ) {
        let state = GameState::new(
            pair_count,
            LIMIT,
            |i| i,
            &mut ChaCha8Rng::seed_from_u64(seed),
        );

        prop_assert_eq!(state.cards().len(), pair_count * 2);

        let ids: HashSet<CardId> = state.cards().iter().map(|c| c.id()).collect();
        prop_assert_eq!(ids.len(), pair_count * 2);
        prop_assert!(ids.iter().all(|&id| (id as usize) < pair_count * 2));

        for pair_index in 0..pair_count {
            let copies = state
                .cards()
                .iter()
                .filter(|c| *c.content() == pair_index)
                .count();
            prop_assert_eq!(copies, 2);
        }

        for card in state.cards() {
            prop_assert!(!card.is_face_up());
            prop_assert!(!card.is_matched());
            prop_assert_eq!(card.bonus_time_remaining(Duration::ZERO), LIMIT);
        }
    }

    /// Property: shuffling permutes order but preserves every card exactly,
    /// flags included.
    #[test]
    fn prop_shuffle_preserves_card_multiset(
        pair_count in 1usize..=8,
        deal_seed in any::<u64>(),
        shuffle_seed in any::<u64>(),
    ) {
        let mut state = GameState::new(
            pair_count,
            LIMIT,
            |i| i,
            &mut ChaCha8Rng::seed_from_u64(deal_seed),
        );

        let mut before = state.cards().to_vec();
        before.sort_by_key(|c| c.id());

        state.shuffle(&mut ChaCha8Rng::seed_from_u64(shuffle_seed));

        let mut after = state.cards().to_vec();
        after.sort_by_key(|c| c.id());
        prop_assert_eq!(before, after);
    }
}
