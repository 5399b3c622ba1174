//! Core types and static catalogs for Uranai: a fortune-telling engine.
//!
//! This crate defines the immutable data model the divination engine draws
//! from. Catalogs are plain value records: you can use the embedded
//! defaults, deserialize overrides from JSON, or construct them
//! programmatically. All selection logic lives in `uranai-engine`.

/// Catalog bundle with JSON override loading and validation.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Lucky attribute bundle attached to fortune results.
pub mod lucky;
/// Numerology life-path profiles.
pub mod numerology;
/// Omikuji fortune tiers and levels.
pub mod omikuji;
/// Tarot card catalog.
pub mod tarot;
/// Zodiac signs and daily fortune tiers.
pub mod zodiac;

/// Re-export the catalog bundle.
pub use catalog::Catalogs;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the lucky attribute bundle.
pub use lucky::LuckyAttributes;
/// Re-export the numerology profile record.
pub use numerology::NumerologyProfile;
/// Re-export omikuji types.
pub use omikuji::{OmikujiLevel, OmikujiTier};
/// Re-export the tarot card record.
pub use tarot::TarotCard;
/// Re-export zodiac types.
pub use zodiac::{DailyTier, DailyTierLevel, ZodiacSign};
