//! Tarot draws: spreads, orientation, and overall tone.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use uranai_core::TarotCard;

use crate::error::{EngineError, EngineResult};

/// A named draw configuration: card count plus ordered position labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spread {
    /// One card for the current situation.
    Single,
    /// Past, present, and future.
    ThreeCard,
}

impl Spread {
    /// Number of cards this spread draws.
    pub fn size(self) -> usize {
        match self {
            Self::Single => 1,
            Self::ThreeCard => 3,
        }
    }

    /// Ordered position labels; the first drawn card takes the first label.
    pub fn positions(self) -> &'static [&'static str] {
        match self {
            Self::Single => &["current"],
            Self::ThreeCard => &["past", "present", "future"],
        }
    }

    /// Map a requested card count to a spread (1 or 3 only).
    pub fn from_count(count: u32) -> EngineResult<Self> {
        match count {
            1 => Ok(Self::Single),
            3 => Ok(Self::ThreeCard),
            other => Err(EngineError::InvalidDrawSize(other)),
        }
    }
}

impl std::fmt::Display for Spread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single card"),
            Self::ThreeCard => write!(f, "three cards"),
        }
    }
}

/// A card as drawn: source card, position label, and orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// The card drawn.
    pub card: TarotCard,
    /// Position label from the spread.
    pub position: String,
    /// Whether the card landed reversed.
    pub is_reversed: bool,
    /// The meaning text matching the orientation.
    pub meaning: String,
}

impl DrawnCard {
    /// "upright" or "reversed".
    pub fn orientation(&self) -> &'static str {
        if self.is_reversed { "reversed" } else { "upright" }
    }
}

/// Overall sentiment of a reading, from the upright/reversed balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FortuneTone {
    /// Every card upright.
    Radiant,
    /// A strict majority upright.
    Favorable,
    /// Exactly half upright.
    Balanced,
    /// A majority reversed.
    Challenging,
}

impl FortuneTone {
    /// One-line reading of the tone.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Radiant => "An exceptionally good outlook. Act with confidence.",
            Self::Favorable => "A broadly good outlook. Proceed with a little care and you will succeed.",
            Self::Balanced => "A balanced outlook. Weigh your decisions and move steadily.",
            Self::Challenging => "A challenging period, but overcoming it will bring growth.",
        }
    }
}

impl std::fmt::Display for FortuneTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Radiant => write!(f, "Radiant"),
            Self::Favorable => write!(f, "Favorable"),
            Self::Balanced => write!(f, "Balanced"),
            Self::Challenging => write!(f, "Challenging"),
        }
    }
}

/// Classify a reading by counting upright cards.
pub fn tone(cards: &[DrawnCard]) -> FortuneTone {
    let upright = cards.iter().filter(|c| !c.is_reversed).count();
    let total = cards.len();
    if upright == total {
        FortuneTone::Radiant
    } else if upright * 2 > total {
        FortuneTone::Favorable
    } else if upright * 2 == total {
        FortuneTone::Balanced
    } else {
        FortuneTone::Challenging
    }
}

/// Draw a spread from the catalog.
///
/// Cards are selected without replacement (pairwise-distinct indices) by a
/// partial Fisher-Yates pass over the index range; position labels are
/// assigned in draw order. Each card is independently reversed with
/// `reversal_probability`.
pub fn draw(
    spread: Spread,
    cards: &[TarotCard],
    reversal_probability: f64,
    rng: &mut StdRng,
) -> EngineResult<Vec<DrawnCard>> {
    let need = spread.size();
    if cards.len() < need {
        return Err(EngineError::CatalogTooSmall {
            need,
            have: cards.len(),
        });
    }

    let mut indices: Vec<usize> = (0..cards.len()).collect();
    for i in 0..need {
        let j = rng.random_range(i..indices.len());
        indices.swap(i, j);
    }

    let drawn = indices[..need]
        .iter()
        .zip(spread.positions())
        .map(|(&idx, &position)| {
            let card = cards[idx].clone();
            let is_reversed = rng.random_bool(reversal_probability);
            let meaning = if is_reversed {
                card.reversed_meaning.clone()
            } else {
                card.upright_meaning.clone()
            };
            DrawnCard {
                card,
                position: position.to_string(),
                is_reversed,
                meaning,
            }
        })
        .collect();

    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use uranai_core::tarot::default_cards;

    fn drawn(id: u32, reversed: bool) -> DrawnCard {
        DrawnCard {
            card: default_cards()[id as usize].clone(),
            position: "current".to_string(),
            is_reversed: reversed,
            meaning: String::new(),
        }
    }

    #[test]
    fn spread_sizes_and_positions() {
        assert_eq!(Spread::Single.positions(), &["current"]);
        assert_eq!(Spread::ThreeCard.positions(), &["past", "present", "future"]);
        assert_eq!(Spread::Single.size(), 1);
        assert_eq!(Spread::ThreeCard.size(), 3);
    }

    #[test]
    fn from_count_accepts_1_and_3_only() {
        assert_eq!(Spread::from_count(1).unwrap(), Spread::Single);
        assert_eq!(Spread::from_count(3).unwrap(), Spread::ThreeCard);
        assert!(matches!(
            Spread::from_count(2),
            Err(EngineError::InvalidDrawSize(2))
        ));
    }

    #[test]
    fn three_card_draw_is_distinct_and_ordered() {
        let cards = default_cards();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let reading = draw(Spread::ThreeCard, &cards, 0.3, &mut rng).unwrap();
            assert_eq!(reading.len(), 3);
            let positions: Vec<&str> = reading.iter().map(|c| c.position.as_str()).collect();
            assert_eq!(positions, ["past", "present", "future"]);
            let ids: Vec<u32> = reading.iter().map(|c| c.card.id).collect();
            assert_ne!(ids[0], ids[1]);
            assert_ne!(ids[0], ids[2]);
            assert_ne!(ids[1], ids[2]);
        }
    }

    #[test]
    fn meaning_matches_orientation() {
        let cards = default_cards();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let reading = draw(Spread::ThreeCard, &cards, 0.5, &mut rng).unwrap();
            for c in reading {
                if c.is_reversed {
                    assert_eq!(c.meaning, c.card.reversed_meaning);
                } else {
                    assert_eq!(c.meaning, c.card.upright_meaning);
                }
            }
        }
    }

    #[test]
    fn zero_probability_never_reverses() {
        let cards = default_cards();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let reading = draw(Spread::ThreeCard, &cards, 0.0, &mut rng).unwrap();
            assert!(reading.iter().all(|c| !c.is_reversed));
        }
    }

    #[test]
    fn unit_probability_always_reverses() {
        let cards = default_cards();
        let mut rng = StdRng::seed_from_u64(1);
        let reading = draw(Spread::ThreeCard, &cards, 1.0, &mut rng).unwrap();
        assert!(reading.iter().all(|c| c.is_reversed));
    }

    #[test]
    fn draw_is_deterministic_for_a_seed() {
        let cards = default_cards();
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        let a = draw(Spread::ThreeCard, &cards, 0.3, &mut rng1).unwrap();
        let b = draw(Spread::ThreeCard, &cards, 0.3, &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn small_catalog_rejected() {
        let cards = default_cards()[..2].to_vec();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            draw(Spread::ThreeCard, &cards, 0.3, &mut rng),
            Err(EngineError::CatalogTooSmall { need: 3, have: 2 })
        ));
    }

    #[test]
    fn tone_all_upright_is_radiant() {
        let cards = vec![drawn(0, false), drawn(1, false), drawn(2, false)];
        assert_eq!(tone(&cards), FortuneTone::Radiant);
    }

    #[test]
    fn tone_majority_upright_is_favorable() {
        let cards = vec![drawn(0, false), drawn(1, false), drawn(2, true)];
        assert_eq!(tone(&cards), FortuneTone::Favorable);
    }

    #[test]
    fn tone_exact_half_is_balanced() {
        let cards = vec![drawn(0, false), drawn(1, true)];
        assert_eq!(tone(&cards), FortuneTone::Balanced);
    }

    #[test]
    fn tone_majority_reversed_is_challenging() {
        let cards = vec![drawn(0, true), drawn(1, true), drawn(2, false)];
        assert_eq!(tone(&cards), FortuneTone::Challenging);
    }
}
