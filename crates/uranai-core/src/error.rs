//! Error types for catalog validation.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when validating a catalog bundle.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A catalog contains no entries.
    #[error("empty catalog: {0}")]
    EmptyCatalog(&'static str),

    /// Two tarot cards share the same id.
    #[error("duplicate tarot card id: {0}")]
    DuplicateCardId(u32),

    /// A zodiac sign id falls outside 1-12.
    #[error("zodiac sign id out of range 1-12: {0}")]
    SignIdOutOfRange(u32),

    /// Two zodiac signs share the same id.
    #[error("duplicate zodiac sign id: {0}")]
    DuplicateSignId(u32),

    /// Omikuji tier probabilities do not sum to 1.
    #[error("omikuji tier probabilities sum to {0}, expected 1.0")]
    WeightSum(f64),

    /// The numerology catalog lacks a profile for a valid life-path number.
    #[error("numerology profile missing for life-path number {0}")]
    MissingProfile(u32),
}
