//! Engine configuration.

pub mod game;

pub use game::{GameConfig, DEFAULT_BONUS_TIME_LIMIT};
