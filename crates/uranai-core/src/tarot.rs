//! Tarot card catalog.
//!
//! The 22 major arcana with upright and reversed meanings. The default
//! catalog is embedded; a deployment can override it with a JSON file
//! through [`crate::Catalogs::load`].

use serde::{Deserialize, Serialize};

/// A single tarot card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotCard {
    /// Stable card id (0-21 for the major arcana).
    pub id: u32,
    /// Card name.
    pub name: String,
    /// Meaning when drawn upright.
    pub upright_meaning: String,
    /// Meaning when drawn reversed.
    pub reversed_meaning: String,
    /// Display symbol.
    pub symbol: String,
}

/// Major arcana source table: (id, name, upright, reversed, symbol).
const MAJOR_ARCANA: &[(u32, &str, &str, &str, &str)] = &[
    (
        0,
        "The Fool",
        "New beginnings, innocence, a free spirit, trust in possibility. Now is the time to take the first step.",
        "Recklessness, irresponsibility, confusion, lack of preparation. A period that calls for caution.",
        "🃏",
    ),
    (
        1,
        "The Magician",
        "Willpower, creativity, manifestation, focus. You can make full use of your abilities.",
        "Manipulation, deception, untapped talent. Use your power honestly.",
        "🎩",
    ),
    (
        2,
        "The High Priestess",
        "Intuition, hidden knowledge, the inner voice. Answers are found in stillness.",
        "Secrets, surface-level understanding, ignored intuition. Turn inward.",
        "🌒",
    ),
    (
        3,
        "The Empress",
        "Abundance, nurturing, creation, harmony with nature. A season of growth.",
        "Dependence, overprotection, stagnation. Cultivate self-reliance.",
        "👑",
    ),
    (
        4,
        "The Emperor",
        "Authority, stability, structure, leadership. Time to build solid foundations.",
        "Rigidity, domination, abuse of power. Stay flexible.",
        "🏰",
    ),
    (
        5,
        "The Hierophant",
        "Tradition, teaching, spiritual guidance. Learn from established wisdom.",
        "Dogma, prejudice, empty formality. A fresh perspective is needed.",
        "📜",
    ),
    (
        6,
        "The Lovers",
        "Love, harmony, meaningful choices, aligned values. An important decision approaches.",
        "Disharmony, temptation, a wrong turn. Judge carefully.",
        "💕",
    ),
    (
        7,
        "The Chariot",
        "Victory, determination, forward motion, self-control. You have the strength to overcome.",
        "Defeat, lost direction, lack of restraint. Regain your composure.",
        "🏇",
    ),
    (
        8,
        "Strength",
        "Inner strength, courage, patience, gentle power. Face difficulty bravely.",
        "Self-doubt, weakness, fear. Trust the strength you already hold.",
        "🦁",
    ),
    (
        9,
        "The Hermit",
        "Introspection, searching, guidance, spiritual growth. Time alone serves you now.",
        "Isolation, stubbornness, withdrawal. Connection with others matters too.",
        "🕯️",
    ),
    (
        10,
        "Wheel of Fortune",
        "Destiny, cycles, a turn for the better, opportunity. A turning point has arrived.",
        "Bad luck, resistance to change, missed chances. Sometimes you must ride the current.",
        "☸️",
    ),
    (
        11,
        "Justice",
        "Fairness, balance, truth, accountability. You walk the right path.",
        "Unfairness, bias, imbalance. Strive to be even-handed.",
        "⚖️",
    ),
    (
        12,
        "The Hanged Man",
        "Sacrifice, patience, a new perspective, waiting. Now is a time to pause.",
        "Wasted sacrifice, stagnation, impatience. Look at things another way.",
        "🙃",
    ),
    (
        13,
        "Death",
        "Transformation, endings, rebirth, renewal. Release what no longer serves you.",
        "Resistance to change, stagnation, clinging. Accept the transition.",
        "💀",
    ),
    (
        14,
        "Temperance",
        "Harmony, moderation, healing, integration. The middle way is the wise one.",
        "Excess, imbalance, discord. Restore your sense of measure.",
        "🏺",
    ),
    (
        15,
        "The Devil",
        "Bondage, temptation, materialism, limitation. Free yourself from what binds you.",
        "Release, liberation, awakening. True freedom is within reach.",
        "😈",
    ),
    (
        16,
        "The Tower",
        "Upheaval, sudden change, revelation, collapse of old structures. Radical change is necessary.",
        "Averted disaster, inner change, fear of loss. Do not dread the shake-up.",
        "🗼",
    ),
    (
        17,
        "The Star",
        "Hope, inspiration, healing, guidance. A light of hope is visible ahead.",
        "Despair, lost faith, aimlessness. Find your way back to hope.",
        "⭐",
    ),
    (
        18,
        "The Moon",
        "Illusion, intuition, the subconscious, mystery. Trust your instincts.",
        "Confusion, deception, released fear. See through to the truth.",
        "🌙",
    ),
    (
        19,
        "The Sun",
        "Success, joy, vitality, optimism. Splendid results can be expected.",
        "Temporary setback, excessive optimism, ego. Stay humble.",
        "☀️",
    ),
    (
        20,
        "Judgement",
        "Rebirth, awakening, forgiveness, a new chapter. A new stage of life begins.",
        "Self-criticism, regret, clinging to the past. Let the past go.",
        "📯",
    ),
    (
        21,
        "The World",
        "Completion, achievement, integration, fulfilment. Your goal is within reach.",
        "Incompletion, stagnation, unfinished business. See it through to the end.",
        "🌍",
    ),
];

/// Build the embedded default tarot catalog (22 major arcana).
pub fn default_cards() -> Vec<TarotCard> {
    MAJOR_ARCANA
        .iter()
        .map(|&(id, name, upright, reversed, symbol)| TarotCard {
            id,
            name: name.to_string(),
            upright_meaning: upright.to_string(),
            reversed_meaning: reversed.to_string(),
            symbol: symbol.to_string(),
        })
        .collect()
}
