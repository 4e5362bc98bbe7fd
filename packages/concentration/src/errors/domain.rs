//! Domain-level error type.
//!
//! In-game bad input (unknown card ids, re-taps, choosing a matched card) is
//! resolved with defensive no-ops, not errors. `DomainError` covers the
//! configuration contract, the one place a caller can hand the engine an
//! impossible value.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DomainError {
    /// Input/configuration validation failure
    Validation(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}
