//! Statistical checks that shuffling carries no positional bias.
//!
//! Seeded RNG keeps the runs deterministic; the chi-squared bound is far
//! above the df=5 critical value, so a correct uniform shuffle cannot trip
//! it while a biased one (e.g. an off-by-one Fisher-Yates) lands orders of
//! magnitude beyond.

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use concentration::GameState;

const PAIRS: usize = 3;
const DECK_LEN: usize = PAIRS * 2;
const RUNS: usize = 6_000;
const CHI2_BOUND: f64 = 30.0;

fn position_counts<F>(mut deal: F) -> Vec<Vec<usize>>
where
    F: FnMut() -> Vec<u32>,
{
    let mut counts = vec![vec![0usize; DECK_LEN]; DECK_LEN];
    for _ in 0..RUNS {
        for (pos, id) in deal().into_iter().enumerate() {
            counts[id as usize][pos] += 1;
        }
    }
    counts
}

fn assert_unbiased(counts: &[Vec<usize>]) {
    let expected = (RUNS / DECK_LEN) as f64;
    for (id, positions) in counts.iter().enumerate() {
        let chi2: f64 = positions
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(
            chi2 < CHI2_BOUND,
            "card {id} positional chi2 = {chi2:.1} over {RUNS} runs"
        );
    }
}

#[test]
fn construction_shuffle_is_positionally_unbiased() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
    let counts = position_counts(|| {
        let state = GameState::new(PAIRS, Duration::from_secs(6), |i| i, &mut rng);
        state.cards().iter().map(|c| c.id()).collect()
    });
    assert_unbiased(&counts);
}

#[test]
fn reshuffle_is_positionally_unbiased() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xBADCAB);
    let mut state = GameState::new(PAIRS, Duration::from_secs(6), |i| i, &mut rng);
    let counts = position_counts(|| {
        state.shuffle(&mut rng);
        state.cards().iter().map(|c| c.id()).collect()
    });
    assert_unbiased(&counts);
}
