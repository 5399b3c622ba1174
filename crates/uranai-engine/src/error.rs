//! Error types for the divination engine.

use thiserror::Error;

use crate::flow::FlowState;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while computing or presenting a fortune.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A birth date failed validation (impossible, future, or out of bound).
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The requested zodiac sign does not exist in the catalog.
    #[error("unknown zodiac sign: {0}")]
    UnknownSign(String),

    /// A tarot draw requested more cards than the catalog holds.
    #[error("catalog too small: need {need} cards, have {have}")]
    CatalogTooSmall {
        /// Cards required by the spread.
        need: usize,
        /// Cards available in the catalog.
        have: usize,
    },

    /// A draw size other than 1 or 3 was requested.
    #[error("draw size must be 1 or 3, got {0}")]
    InvalidDrawSize(u32),

    /// Weighted tier probabilities do not sum to 1.
    #[error("tier probabilities sum to {0}, expected 1.0")]
    InvalidWeights(f64),

    /// A second draw was triggered while one is still pending.
    #[error("a draw is already in progress")]
    DrawInProgress,

    /// A flow transition that the state machine forbids.
    #[error("invalid flow transition: {from} -> {to}")]
    InvalidTransition {
        /// State the flow is in.
        from: FlowState,
        /// State that was requested.
        to: FlowState,
    },

    /// The drawing phase still needs interactions before it can proceed.
    #[error("{0} interactions remaining before the draw can proceed")]
    InteractionsRemaining(u32),

    /// Invalid command or argument in an interactive session.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Catalog validation error.
    #[error(transparent)]
    Core(#[from] uranai_core::CoreError),

    /// History file I/O error.
    #[error("history io: {0}")]
    Io(#[from] std::io::Error),

    /// History (de)serialization error.
    #[error("history serialization: {0}")]
    Json(#[from] serde_json::Error),
}
