//! # Error Types — Structured Error Hierarchy
//!
//! Top-level error type for the EAM workspace. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Specific subsystems define their own precise error enums (the state
//! machine's `TransitionError`, the ledger's `LedgerError`); `EamError`
//! covers the primitives defined in this crate and serves as the
//! catch-all conversion target at the outermost boundary.

use thiserror::Error;

/// Top-level error type for the EAM workspace.
#[derive(Error, Debug)]
pub enum EamError {
    /// Input failed structural validation (malformed timestamp,
    /// empty identifier, out-of-range value).
    #[error("validation error: {0}")]
    Validation(String),

    /// State machine transition rejected.
    #[error("invalid state transition: {0}")]
    InvalidTransition(String),

    /// Referenced record or entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}
