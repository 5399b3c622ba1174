//! Omikuji fortune tiers and levels.
//!
//! Six tiers from great blessing to great curse, each with a draw
//! probability. The default probabilities sum to exactly 1.0; override
//! catalogs are validated against [`WEIGHT_TOLERANCE`].

use serde::{Deserialize, Serialize};

use crate::lucky::LuckyAttributes;

/// Tolerance when checking that tier probabilities sum to 1.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Omikuji fortune levels, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OmikujiLevel {
    /// Dai-kichi: great blessing.
    GreatBlessing,
    /// Chuu-kichi: middle blessing.
    MiddleBlessing,
    /// Shou-kichi: small blessing.
    SmallBlessing,
    /// Sue-kichi: blessing to come.
    EndingBlessing,
    /// Kyou: curse.
    Curse,
    /// Dai-kyou: great curse.
    GreatCurse,
}

impl OmikujiLevel {
    /// Whether this level belongs to the curse family.
    pub fn is_curse(self) -> bool {
        matches!(self, Self::Curse | Self::GreatCurse)
    }
}

impl std::fmt::Display for OmikujiLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GreatBlessing => write!(f, "Great Blessing"),
            Self::MiddleBlessing => write!(f, "Middle Blessing"),
            Self::SmallBlessing => write!(f, "Small Blessing"),
            Self::EndingBlessing => write!(f, "Ending Blessing"),
            Self::Curse => write!(f, "Curse"),
            Self::GreatCurse => write!(f, "Great Curse"),
        }
    }
}

/// One omikuji tier: fixed text plus its draw probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmikujiTier {
    /// Fortune level.
    pub level: OmikujiLevel,
    /// Tier description.
    pub description: String,
    /// Advice for the bearer.
    pub advice: String,
    /// Warning, carried by curse-family tiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Lucky attributes.
    pub lucky: LuckyAttributes,
    /// Probability of drawing this tier in the weighted variant.
    pub probability: f64,
}

/// Build the embedded default omikuji catalog (6 tiers, weights sum to 1).
pub fn default_tiers() -> Vec<OmikujiTier> {
    vec![
        OmikujiTier {
            level: OmikujiLevel::GreatBlessing,
            description: "Splendid fortune is on your side. Tackle everything boldly.".to_string(),
            advice: "Today could be a special day. Take on something new.".to_string(),
            warning: None,
            lucky: LuckyAttributes::new("gold", 7, "mirror").with_direction("east"),
            probability: 0.15,
        },
        OmikujiTier {
            level: OmikujiLevel::MiddleBlessing,
            description: "Stable fortune. Deliberate plans will bear fruit.".to_string(),
            advice: "Advance one step at a time and you will reach your goal.".to_string(),
            warning: None,
            lucky: LuckyAttributes::new("blue", 5, "book").with_direction("south"),
            probability: 0.25,
        },
        OmikujiTier {
            level: OmikujiLevel::SmallBlessing,
            description: "Small happinesses are on their way. Remember your gratitude.".to_string(),
            advice: "Find joy in little things and cherish the people around you.".to_string(),
            warning: None,
            lucky: LuckyAttributes::new("green", 3, "flower").with_direction("west"),
            probability: 0.25,
        },
        OmikujiTier {
            level: OmikujiLevel::EndingBlessing,
            description: "Careful steps lead somewhere good. Slow and steady.".to_string(),
            advice: "This is a season of preparation. Strengthen your foundations.".to_string(),
            warning: None,
            lucky: LuckyAttributes::new("yellow", 2, "stone").with_direction("north"),
            probability: 0.20,
        },
        OmikujiTier {
            level: OmikujiLevel::Curse,
            description: "A rough patch, but it will pass. Keep your guard up.".to_string(),
            advice: "Postpone big decisions and tend to what you already have.".to_string(),
            warning: Some("Avoid impulsive purchases and hasty promises.".to_string()),
            lucky: LuckyAttributes::new("white", 4, "charm").with_direction("northeast"),
            probability: 0.10,
        },
        OmikujiTier {
            level: OmikujiLevel::GreatCurse,
            description: "Fortune is at its lowest — which means it can only rise.".to_string(),
            advice: "Lie low, rest well, and let the storm blow over.".to_string(),
            warning: Some("Double-check everything important today.".to_string()),
            lucky: LuckyAttributes::new("black", 9, "bell").with_direction("northwest"),
            probability: 0.05,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_6_tiers() {
        let tiers = default_tiers();
        assert_eq!(tiers.len(), 6);
        assert_eq!(tiers[0].level, OmikujiLevel::GreatBlessing);
        assert_eq!(tiers[5].level, OmikujiLevel::GreatCurse);
    }

    #[test]
    fn default_weights_sum_to_one() {
        let sum: f64 = default_tiers().iter().map(|t| t.probability).sum();
        assert!((sum - 1.0).abs() < WEIGHT_TOLERANCE, "sum = {sum}");
    }

    #[test]
    fn only_curse_tiers_carry_warnings() {
        for tier in default_tiers() {
            assert_eq!(tier.level.is_curse(), tier.warning.is_some(), "{}", tier.level);
        }
    }

    #[test]
    fn level_display() {
        assert_eq!(OmikujiLevel::GreatBlessing.to_string(), "Great Blessing");
        assert_eq!(OmikujiLevel::GreatCurse.to_string(), "Great Curse");
    }

    #[test]
    fn tier_serde_round_trip() {
        let tiers = default_tiers();
        let json = serde_json::to_string(&tiers).unwrap();
        let back: Vec<OmikujiTier> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tiers);
    }
}
