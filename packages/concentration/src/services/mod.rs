//! Orchestration layer bridging pure domain logic with presentation intents.

pub mod game_controller;

pub use game_controller::GameController;
