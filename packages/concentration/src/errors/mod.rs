//! Error handling for the concentration engine.

pub mod domain;

pub use domain::DomainError;
