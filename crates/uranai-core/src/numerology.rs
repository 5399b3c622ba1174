//! Numerology life-path profiles.
//!
//! One profile per valid life-path number: 1-9 plus the master numbers
//! 11, 22, and 33.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The twelve valid life-path numbers.
pub const LIFE_PATH_NUMBERS: &[u32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

/// Personality profile for one life-path number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    /// Character description.
    pub description: String,
    /// Advice.
    pub advice: String,
    /// Personal strengths.
    pub strengths: Vec<String>,
    /// Personal challenges.
    pub challenges: Vec<String>,
    /// Life goal.
    pub life_goal: String,
    /// Lucky color.
    pub lucky_color: String,
    /// Lucky item.
    pub lucky_item: String,
}

/// Profile source table:
/// (number, description, advice, strengths, challenges, life goal, color, item).
#[allow(clippy::type_complexity)]
const PROFILES: &[(
    u32,
    &str,
    &str,
    [&str; 4],
    [&str; 4],
    &str,
    &str,
    &str,
)] = &[
    (
        1,
        "A born leader with strong independence and the power to open new paths.",
        "Trust your instincts and act boldly.",
        ["leadership", "independence", "creativity", "decisiveness"],
        ["self-centredness", "impatience", "not listening", "loneliness"],
        "To pioneer new ground and lead many people",
        "red",
        "red pen",
    ),
    (
        2,
        "Cooperative and harmonious; teamwork is your natural element.",
        "Treasure your relationships and work together with others.",
        ["cooperation", "empathy", "diplomacy", "supportiveness"],
        ["indecision", "dependence", "self-doubt", "conflict avoidance"],
        "To connect people and build harmonious relationships",
        "blue",
        "paired accessory",
    ),
    (
        3,
        "Richly creative and expressive, blessed with artistic talent.",
        "Put your creativity to use and try new forms of expression.",
        ["creativity", "expressiveness", "optimism", "sociability"],
        ["scattered focus", "superficiality", "restlessness", "escapism"],
        "To move many people through art and creative work",
        "yellow",
        "writing tools",
    ),
    (
        4,
        "Grounded and responsible; you build success through steady effort.",
        "Lay solid foundations and advance toward your goals step by step.",
        ["responsibility", "steadiness", "organisation", "patience"],
        ["stubbornness", "dislike of change", "perfectionism", "inflexibility"],
        "To build a stable foundation and achieve lasting success",
        "green",
        "planner",
    ),
    (
        5,
        "A lover of freedom and change who seeks out new experiences.",
        "Do not fear change; enjoy every new challenge.",
        ["free spirit", "adaptability", "curiosity", "versatility"],
        ["restlessness", "avoiding commitment", "inconsistency", "impulsiveness"],
        "To live freely through a wealth of diverse experiences",
        "purple",
        "travel gear",
    ),
    (
        6,
        "Deeply loving; caring for family and friends comes naturally to you.",
        "Spend time with the people you love and deepen those bonds.",
        ["devotion", "responsibility", "protectiveness", "healing presence"],
        ["overprotection", "worry", "self-sacrifice", "possessiveness"],
        "To protect loved ones and build a warm home",
        "pink",
        "photograph",
    ),
    (
        7,
        "A seeker of truth and spiritual growth with a deeply analytical mind.",
        "Face your inner world and come to understand yourself deeply.",
        ["inquiry", "intuition", "analysis", "independence"],
        ["loneliness", "perfectionism", "criticism", "withdrawal"],
        "To seek truth and reach spiritual insight",
        "violet",
        "book",
    ),
    (
        8,
        "Ambitious and success-driven, with the power to build material abundance.",
        "Set clear goals and move toward success deliberately.",
        ["ambition", "organisation", "execution", "business sense"],
        ["materialism", "hunger for power", "coldness", "overwork"],
        "To achieve material success and standing",
        "gold",
        "watch",
    ),
    (
        9,
        "Humanitarian and idealistic; you wish to make the world better.",
        "Hold on to your ideals and consider how you can serve others.",
        ["humanitarianism", "idealism", "generosity", "universal love"],
        ["impracticality", "emotionality", "self-sacrifice", "perfectionism"],
        "To contribute to the happiness of humanity",
        "white",
        "volunteer work",
    ),
    (
        11,
        "Sharply intuitive with a spiritual gift; you can guide others.",
        "Trust your intuition and nurture your spiritual growth.",
        ["intuition", "inspiration", "sensitivity", "idealism"],
        ["nervousness", "instability", "escapism", "perfectionism"],
        "To awaken and inspire many as a spiritual guide",
        "silver",
        "crystal",
    ),
    (
        22,
        "You carry the power to realise great dreams and influence the world.",
        "Hold a grand goal and advance steadily toward making it real.",
        ["manifestation", "vision", "organisation", "influence"],
        ["pressure", "perfectionism", "weight of duty", "loneliness"],
        "To realise a grand vision with lasting impact on the world",
        "gold",
        "blueprint",
    ),
    (
        33,
        "A spirit of love and service; your calling is to heal and guide many.",
        "Heal people with the power of love and bring peace around you.",
        ["unconditional love", "healing", "service", "compassion"],
        ["self-sacrifice", "emotional burden", "escapism", "perfectionism"],
        "To further the spiritual growth of others through love and healing",
        "iridescent",
        "healing charm",
    ),
];

/// Build the embedded default numerology catalog (all 12 profiles).
pub fn default_profiles() -> BTreeMap<u32, NumerologyProfile> {
    PROFILES
        .iter()
        .map(
            |&(number, description, advice, strengths, challenges, life_goal, color, item)| {
                (
                    number,
                    NumerologyProfile {
                        description: description.to_string(),
                        advice: advice.to_string(),
                        strengths: strengths.iter().map(|s| (*s).to_string()).collect(),
                        challenges: challenges.iter().map(|s| (*s).to_string()).collect(),
                        life_goal: life_goal.to_string(),
                        lucky_color: color.to_string(),
                        lucky_item: item.to_string(),
                    },
                )
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_all_life_path_numbers() {
        let profiles = default_profiles();
        assert_eq!(profiles.len(), LIFE_PATH_NUMBERS.len());
        for n in LIFE_PATH_NUMBERS {
            assert!(profiles.contains_key(n), "missing profile for {n}");
        }
    }

    #[test]
    fn no_profile_for_invalid_numbers() {
        let profiles = default_profiles();
        for n in [0, 10, 12, 21, 23, 34] {
            assert!(!profiles.contains_key(&n));
        }
    }

    #[test]
    fn profiles_are_complete() {
        for (n, p) in default_profiles() {
            assert!(!p.description.is_empty(), "{n}");
            assert_eq!(p.strengths.len(), 4, "{n}");
            assert_eq!(p.challenges.len(), 4, "{n}");
            assert!(!p.life_goal.is_empty(), "{n}");
        }
    }
}
