// Shared proptest configuration for domain property tests.

use proptest::prelude::ProptestConfig;

/// Read the case count from `PROPTEST_CASES`, with a low default for fast CI.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
