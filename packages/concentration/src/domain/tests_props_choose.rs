//! Property-based tests for the choose rules over random intent sequences.

use std::collections::HashMap;
use std::time::Duration;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::card::CardId;
use crate::domain::state::GameState;
use crate::domain::{test_gens, test_prelude};

const LIMIT: Duration = Duration::from_secs(6);

fn face_up_unmatched_count(state: &GameState<usize>) -> usize {
    state
        .cards()
        .iter()
        .filter(|c| c.is_face_up() && !c.is_matched())
        .count()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Drive a random intent sequence and check the structural invariants
    /// after every call:
    /// - no-op paths leave the state untouched
    /// - a choose through an empty flip slot ends with exactly one face-up
    ///   unmatched card; through an occupied slot, zero (match) or two
    ///   (mismatch)
    /// - `is_matched` is monotonic and contents match in full pairs
    #[test]
    fn prop_choose_sequences_hold_invariants(
        (pair_count, ids) in test_gens::choose_sequence(),
        seed in any::<u64>(),
    ) {
        let mut state = GameState::new(
            pair_count,
            LIMIT,
            |i| i,
            &mut ChaCha8Rng::seed_from_u64(seed),
        );

        let mut now = Duration::ZERO;
        for id in ids {
            let slot_occupied = face_up_unmatched_count(&state) == 1;
            let mutates = state
                .card(id)
                .map(|c| !c.is_face_up() && !c.is_matched())
                .unwrap_or(false);
            let before = state.clone();

            state.choose(id, now);
            now += Duration::from_millis(250);

            if !mutates {
                prop_assert_eq!(&state, &before);
                continue;
            }

            let open = face_up_unmatched_count(&state);
            if slot_occupied {
                prop_assert!(open == 0 || open == 2, "open = {}", open);
            } else {
                prop_assert_eq!(open, 1);
            }

            // Matched is monotonic.
            let was_matched: HashMap<CardId, bool> = before
                .cards()
                .iter()
                .map(|c| (c.id(), c.is_matched()))
                .collect();
            for card in state.cards() {
                if was_matched[&card.id()] {
                    prop_assert!(card.is_matched());
                }
                // Matched cards stay face-up for good.
                if card.is_matched() {
                    prop_assert!(card.is_face_up());
                }
            }

            // Contents match in full pairs.
            for pair_index in 0..pair_count {
                let matched = state
                    .cards()
                    .iter()
                    .filter(|c| *c.content() == pair_index && c.is_matched())
                    .count();
                prop_assert!(matched == 0 || matched == 2);
            }
        }
    }
}
