#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Core engine for a card-matching ("concentration") game.
//!
//! The crate is split in two strict layers: [`domain`] holds the deck and
//! every mutation rule (deck construction, the single-flip-slot choose rule,
//! match detection, bonus-time accounting), and [`services`] wraps one
//! [`domain::GameState`] behind intents (`choose`, `shuffle`, `restart`) with
//! state-change notifications for presentation code. Rendering, animation,
//! and process bootstrap live outside this crate and talk to it only through
//! [`services::GameController`].

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::{GameConfig, DEFAULT_BONUS_TIME_LIMIT};
pub use domain::clock::{GameClock, ManualClock, SystemClock};
pub use domain::snapshot::{CardView, GameSnapshot};
pub use domain::themes::Theme;
pub use domain::{Card, CardId, GameState};
pub use errors::DomainError;
pub use services::GameController;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
