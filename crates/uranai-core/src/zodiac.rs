//! Zodiac signs and daily fortune tiers.
//!
//! Twelve signs plus the fixed five-level daily tier table and the small
//! per-category message pools the daily fortune indexes into. Everything
//! here is static content; the day/sign arithmetic lives in the engine.

use serde::{Deserialize, Serialize};

use crate::lucky::LuckyAttributes;

/// A zodiac sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacSign {
    /// Sign id, 1 (Aries) through 12 (Pisces).
    pub id: u32,
    /// Sign name.
    pub name: String,
    /// One-line character description.
    pub description: String,
    /// Items considered lucky for this sign.
    pub lucky_items: Vec<String>,
}

/// The five daily fortune levels, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DailyTierLevel {
    /// The best possible day.
    Excellent,
    /// A good day.
    Good,
    /// A stable, unremarkable day.
    Steady,
    /// A day that calls for care.
    Caution,
    /// A slow day; patience pays.
    Slow,
}

impl DailyTierLevel {
    /// All levels in table order (index 0-4).
    pub fn all() -> &'static [Self] {
        &[
            Self::Excellent,
            Self::Good,
            Self::Steady,
            Self::Caution,
            Self::Slow,
        ]
    }
}

impl std::fmt::Display for DailyTierLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Steady => write!(f, "Steady"),
            Self::Caution => write!(f, "Caution"),
            Self::Slow => write!(f, "Slow"),
        }
    }
}

/// One row of the daily fortune tier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTier {
    /// Fortune level.
    pub level: DailyTierLevel,
    /// Advice for the day.
    pub advice: String,
    /// Lucky attributes for the day.
    pub lucky: LuckyAttributes,
}

/// Sign source table: (id, name, description, lucky items).
const SIGNS: &[(u32, &str, &str, [&str; 3])] = &[
    (
        1,
        "Aries",
        "Passionate and driven, you lead with action.",
        ["red scarf", "pocket knife", "cap"],
    ),
    (
        2,
        "Taurus",
        "Steadfast and practical, you value stability.",
        ["green notebook", "ceramic mug", "plant"],
    ),
    (
        3,
        "Gemini",
        "Curious and sociable, you thrive on conversation.",
        ["silver pen", "paperback", "earphones"],
    ),
    (
        4,
        "Cancer",
        "Warm-hearted and devoted, family comes first for you.",
        ["seashell", "photo frame", "soft blanket"],
    ),
    (
        5,
        "Leo",
        "Confident and radiant, a natural-born leader.",
        ["gold ring", "sunglasses", "ticket stub"],
    ),
    (
        6,
        "Virgo",
        "Precise and analytical, you see what others miss.",
        ["planner", "white handkerchief", "herbal tea"],
    ),
    (
        7,
        "Libra",
        "Balanced and peace-loving, with an eye for beauty.",
        ["perfume", "scales charm", "rose"],
    ),
    (
        8,
        "Scorpio",
        "Intense and perceptive, you read beneath the surface.",
        ["obsidian stone", "dark coat", "old key"],
    ),
    (
        9,
        "Sagittarius",
        "Adventurous and free, always chasing the horizon.",
        ["compass", "travel journal", "arrow pendant"],
    ),
    (
        10,
        "Capricorn",
        "Disciplined and ambitious, you climb step by step.",
        ["wristwatch", "leather wallet", "mountain photo"],
    ),
    (
        11,
        "Aquarius",
        "Original and forward-looking, you think in futures.",
        ["blue glass", "gadget", "sketchbook"],
    ),
    (
        12,
        "Pisces",
        "Imaginative and empathetic, you feel the room.",
        ["seaglass", "music box", "watercolour set"],
    ),
];

/// Build the embedded default zodiac catalog (12 signs).
pub fn default_signs() -> Vec<ZodiacSign> {
    SIGNS
        .iter()
        .map(|&(id, name, description, items)| ZodiacSign {
            id,
            name: name.to_string(),
            description: description.to_string(),
            lucky_items: items.iter().map(|s| (*s).to_string()).collect(),
        })
        .collect()
}

/// The fixed daily tier table, best to worst (5 rows).
pub fn daily_tiers() -> Vec<DailyTier> {
    vec![
        DailyTier {
            level: DailyTierLevel::Excellent,
            advice: "You are in top form today. Try something new.".to_string(),
            lucky: LuckyAttributes::new("gold", 7, "mirror"),
        },
        DailyTier {
            level: DailyTierLevel::Good,
            advice: "A good day is coming. Act with confidence.".to_string(),
            lucky: LuckyAttributes::new("blue", 3, "book"),
        },
        DailyTier {
            level: DailyTierLevel::Steady,
            advice: "A stable day. Move through your plans methodically.".to_string(),
            lucky: LuckyAttributes::new("green", 5, "plant"),
        },
        DailyTier {
            level: DailyTierLevel::Caution,
            advice: "Small joys are within reach. Be grateful to those around you.".to_string(),
            lucky: LuckyAttributes::new("yellow", 2, "letter"),
        },
        DailyTier {
            level: DailyTierLevel::Slow,
            advice: "Move carefully and good results will follow.".to_string(),
            lucky: LuckyAttributes::new("purple", 8, "stone"),
        },
    ]
}

/// Love messages, indexed by daily tier (5 entries).
pub const LOVE_MESSAGES: &[&str] = &[
    "A wonderful encounter may be waiting.",
    "Your bond with a partner deepens.",
    "An unspoken feeling may finally land.",
    "Try to understand how the other person feels.",
    "Stay natural and unhurried.",
];

/// Work messages, indexed by daily tier (5 entries).
pub const WORK_MESSAGES: &[&str] = &[
    "You can shine on an important project.",
    "Teamwork is the key to success.",
    "A new idea of yours gets noticed.",
    "Go back to basics and work steadily.",
    "Listen to the advice of someone senior.",
];

/// Health messages, indexed by daily tier (5 entries).
pub const HEALTH_MESSAGES: &[&str] = &[
    "Your condition is excellent.",
    "Keep up moderate exercise.",
    "Mind a balanced diet.",
    "Make sure you rest enough.",
    "Do not overdo it today.",
];

/// Money messages, indexed by daily tier (5 entries).
pub const MONEY_MESSAGES: &[&str] = &[
    "Unexpected income may come your way.",
    "Plan your spending deliberately.",
    "An opportunity to invest may appear.",
    "Keep an eye on small expenses.",
    "A good day to review the household budget.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_12_signs() {
        let signs = default_signs();
        assert_eq!(signs.len(), 12);
        assert_eq!(signs[0].name, "Aries");
        assert_eq!(signs[11].name, "Pisces");
    }

    #[test]
    fn sign_ids_run_1_to_12() {
        for (i, sign) in default_signs().iter().enumerate() {
            assert_eq!(sign.id, i as u32 + 1);
            assert_eq!(sign.lucky_items.len(), 3);
        }
    }

    #[test]
    fn tier_table_has_5_rows_best_to_worst() {
        let tiers = daily_tiers();
        assert_eq!(tiers.len(), 5);
        assert_eq!(tiers[0].level, DailyTierLevel::Excellent);
        assert_eq!(tiers[4].level, DailyTierLevel::Slow);
    }

    #[test]
    fn message_pools_match_tier_count() {
        assert_eq!(LOVE_MESSAGES.len(), 5);
        assert_eq!(WORK_MESSAGES.len(), 5);
        assert_eq!(HEALTH_MESSAGES.len(), 5);
        assert_eq!(MONEY_MESSAGES.len(), 5);
    }

    #[test]
    fn tier_level_display() {
        assert_eq!(DailyTierLevel::Excellent.to_string(), "Excellent");
        assert_eq!(DailyTierLevel::Slow.to_string(), "Slow");
    }
}
