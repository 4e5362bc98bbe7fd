//! Game session configuration.

use std::time::Duration;

use crate::errors::domain::DomainError;

/// Per-card bonus window used when no explicit limit is configured.
pub const DEFAULT_BONUS_TIME_LIMIT: Duration = Duration::from_secs(6);

/// Deck parameters for one game session.
///
/// The same config is reused verbatim on every `restart`, so a session keeps
/// its deck size and bonus window for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Number of content pairs; the deck holds twice this many cards.
    pub pair_count: usize,
    /// Bonus window granted to each card at creation. Must be positive.
    pub bonus_time_limit: Duration,
    /// Seed for the shuffle RNG. `None` draws entropy from the OS; a fixed
    /// seed makes every shuffle of the session reproducible.
    pub rng_seed: Option<u64>,
}

impl GameConfig {
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            bonus_time_limit: DEFAULT_BONUS_TIME_LIMIT,
            rng_seed: None,
        }
    }

    pub fn with_bonus_time_limit(mut self, limit: Duration) -> Self {
        self.bonus_time_limit = limit;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Check the configuration contract.
    ///
    /// A zero pair count is valid (empty deck, all operations are safe
    /// no-ops); a zero bonus window is not, since every bonus derivation
    /// divides by or compares against it.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.bonus_time_limit.is_zero() {
            return Err(DomainError::validation(
                "bonus_time_limit must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_six_second_bonus_window() {
        let config = GameConfig::new(8);
        assert_eq!(config.pair_count, 8);
        assert_eq!(config.bonus_time_limit, Duration::from_secs(6));
        assert_eq!(config.rng_seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders_override_fields() {
        let config = GameConfig::new(4)
            .with_bonus_time_limit(Duration::from_secs(10))
            .with_rng_seed(7);
        assert_eq!(config.bonus_time_limit, Duration::from_secs(10));
        assert_eq!(config.rng_seed, Some(7));
    }

    #[test]
    fn zero_pair_count_is_valid() {
        assert!(GameConfig::new(0).validate().is_ok());
    }

    #[test]
    fn zero_bonus_limit_is_rejected() {
        let config = GameConfig::new(4).with_bonus_time_limit(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
