//! Result assembly.
//!
//! Pure mapping from drawn data to displayable result records. The
//! timestamp is an input: assembling the same inputs twice yields
//! identical records, with no hidden randomness.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use uranai_core::{LuckyAttributes, NumerologyProfile, OmikujiLevel, OmikujiTier, ZodiacSign};

use crate::tarot::{DrawnCard, FortuneTone, Spread, tone};
use crate::zodiac::DailyFortune;

/// The four divination modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FortuneMode {
    /// Tarot card draw.
    Tarot,
    /// Zodiac daily fortune.
    Zodiac,
    /// Omikuji fortune slip.
    Omikuji,
    /// Numerology life-path reading.
    Numerology,
}

impl FortuneMode {
    /// All modes.
    pub fn all() -> &'static [Self] {
        &[Self::Tarot, Self::Zodiac, Self::Omikuji, Self::Numerology]
    }

    /// Lowercase mode name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tarot => "tarot",
            Self::Zodiac => "zodiac",
            Self::Omikuji => "omikuji",
            Self::Numerology => "numerology",
        }
    }

    /// The one-shot mailbox key for this mode.
    pub fn result_key(self) -> String {
        format!("{}-result", self.as_str())
    }

    /// Parse a mode name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tarot" => Some(Self::Tarot),
            "zodiac" => Some(Self::Zodiac),
            "omikuji" => Some(Self::Omikuji),
            "numerology" => Some(Self::Numerology),
            _ => None,
        }
    }
}

impl std::fmt::Display for FortuneMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The common displayable shape every mode produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneResult {
    /// Result headline.
    pub title: String,
    /// Main interpretation text.
    pub description: String,
    /// Advice text.
    pub advice: String,
    /// Lucky attributes, if the mode provides them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lucky: Option<LuckyAttributes>,
    /// When the result was produced.
    pub timestamp: DateTime<Utc>,
}

/// A tarot reading: common result plus the drawn cards and overall tone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TarotReading {
    /// Common result fields.
    pub result: FortuneResult,
    /// The spread that was drawn.
    pub spread: Spread,
    /// The drawn cards in position order.
    pub cards: Vec<DrawnCard>,
    /// Overall sentiment of the reading.
    pub tone: FortuneTone,
}

/// A zodiac reading: common result plus the sign and per-category fortune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZodiacReading {
    /// Common result fields.
    pub result: FortuneResult,
    /// The consulted sign.
    pub sign: ZodiacSign,
    /// Today's fortune detail.
    pub fortune: DailyFortune,
}

/// An omikuji reading: common result plus level and optional warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmikujiReading {
    /// Common result fields.
    pub result: FortuneResult,
    /// The drawn fortune level.
    pub level: OmikujiLevel,
    /// Warning carried by curse-family tiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// A numerology reading: common result plus the calculation detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumerologyReading {
    /// Common result fields.
    pub result: FortuneResult,
    /// The birth date the number derives from.
    pub birth_date: NaiveDate,
    /// The life-path number.
    pub life_path: u32,
    /// The ordered reduction trace.
    pub steps: Vec<String>,
    /// The matching personality profile.
    pub profile: NumerologyProfile,
}

/// Any completed reading, for storage and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum FortuneRecord {
    /// A tarot reading.
    Tarot(TarotReading),
    /// A zodiac reading.
    Zodiac(ZodiacReading),
    /// An omikuji reading.
    Omikuji(OmikujiReading),
    /// A numerology reading.
    Numerology(NumerologyReading),
}

impl FortuneRecord {
    /// Which mode produced this record.
    pub fn mode(&self) -> FortuneMode {
        match self {
            Self::Tarot(_) => FortuneMode::Tarot,
            Self::Zodiac(_) => FortuneMode::Zodiac,
            Self::Omikuji(_) => FortuneMode::Omikuji,
            Self::Numerology(_) => FortuneMode::Numerology,
        }
    }

    /// The common result fields.
    pub fn result(&self) -> &FortuneResult {
        match self {
            Self::Tarot(r) => &r.result,
            Self::Zodiac(r) => &r.result,
            Self::Omikuji(r) => &r.result,
            Self::Numerology(r) => &r.result,
        }
    }
}

/// Assemble a tarot reading from drawn cards.
pub fn assemble_tarot(
    spread: Spread,
    cards: Vec<DrawnCard>,
    timestamp: DateTime<Utc>,
) -> TarotReading {
    let reading_tone = tone(&cards);
    let mut description = String::new();
    for card in &cards {
        description.push_str(&format!(
            "[{}] {} ({}): {}\n",
            capitalize(&card.position),
            card.card.name,
            card.orientation(),
            card.meaning,
        ));
    }

    TarotReading {
        result: FortuneResult {
            title: "Tarot Reading".to_string(),
            description: description.trim_end().to_string(),
            advice: reading_tone.summary().to_string(),
            lucky: None,
            timestamp,
        },
        spread,
        cards,
        tone: reading_tone,
    }
}

/// Assemble a zodiac reading for a sign's daily fortune.
pub fn assemble_zodiac(
    sign: &ZodiacSign,
    fortune: DailyFortune,
    timestamp: DateTime<Utc>,
) -> ZodiacReading {
    ZodiacReading {
        result: FortuneResult {
            title: format!("Today's fortune for {}", sign.name),
            description: format!(
                "{}\n\nToday your fortune is {}.",
                sign.description, fortune.tier.level
            ),
            advice: fortune.tier.advice.clone(),
            lucky: Some(fortune.lucky.clone()),
            timestamp,
        },
        sign: sign.clone(),
        fortune,
    }
}

/// Assemble an omikuji reading from a drawn tier.
pub fn assemble_omikuji(tier: &OmikujiTier, timestamp: DateTime<Utc>) -> OmikujiReading {
    OmikujiReading {
        result: FortuneResult {
            title: format!("Omikuji: {}", tier.level),
            description: tier.description.clone(),
            advice: tier.advice.clone(),
            lucky: Some(tier.lucky.clone()),
            timestamp,
        },
        level: tier.level,
        warning: tier.warning.clone(),
    }
}

/// Assemble a numerology reading from a computed life-path number.
pub fn assemble_numerology(
    birth_date: NaiveDate,
    life_path: u32,
    steps: Vec<String>,
    profile: &NumerologyProfile,
    timestamp: DateTime<Utc>,
) -> NumerologyReading {
    NumerologyReading {
        result: FortuneResult {
            title: format!("Life Path Number {life_path}"),
            description: profile.description.clone(),
            advice: profile.advice.clone(),
            lucky: Some(LuckyAttributes {
                color: Some(profile.lucky_color.clone()),
                number: Some(life_path),
                item: Some(profile.lucky_item.clone()),
                direction: None,
            }),
            timestamp,
        },
        birth_date,
        life_path,
        steps,
        profile: profile.clone(),
    }
}

/// Uppercase the first letter of a position label.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use uranai_core::Catalogs;

    use crate::numerology::{life_path_number, life_path_steps};
    use crate::zodiac::daily_fortune;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap()
    }

    #[test]
    fn mode_keys_follow_convention() {
        assert_eq!(FortuneMode::Tarot.result_key(), "tarot-result");
        assert_eq!(FortuneMode::Numerology.result_key(), "numerology-result");
    }

    #[test]
    fn mode_parse_round_trips() {
        for mode in FortuneMode::all() {
            assert_eq!(FortuneMode::parse(mode.as_str()), Some(*mode));
        }
        assert_eq!(FortuneMode::parse("TAROT"), Some(FortuneMode::Tarot));
        assert_eq!(FortuneMode::parse("palmistry"), None);
    }

    #[test]
    fn tarot_assembly_is_idempotent() {
        let catalogs = Catalogs::default();
        let mut rng = StdRng::seed_from_u64(42);
        let cards =
            crate::tarot::draw(crate::tarot::Spread::ThreeCard, &catalogs.tarot, 0.3, &mut rng)
                .unwrap();

        let a = assemble_tarot(Spread::ThreeCard, cards.clone(), ts());
        let b = assemble_tarot(Spread::ThreeCard, cards, ts());
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn tarot_description_lists_every_position() {
        let catalogs = Catalogs::default();
        let mut rng = StdRng::seed_from_u64(1);
        let cards =
            crate::tarot::draw(crate::tarot::Spread::ThreeCard, &catalogs.tarot, 0.3, &mut rng)
                .unwrap();
        let reading = assemble_tarot(Spread::ThreeCard, cards, ts());
        assert!(reading.result.description.contains("[Past]"));
        assert!(reading.result.description.contains("[Present]"));
        assert!(reading.result.description.contains("[Future]"));
        assert!(reading.result.lucky.is_none());
    }

    #[test]
    fn zodiac_assembly_carries_tier_and_lucky() {
        let catalogs = Catalogs::default();
        let sign = &catalogs.zodiac[4];
        let day = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let reading = assemble_zodiac(sign, daily_fortune(sign, day), ts());
        assert!(reading.result.title.contains("Leo"));
        assert!(reading.result.lucky.as_ref().unwrap().direction.is_some());
    }

    #[test]
    fn omikuji_assembly_keeps_warning() {
        let catalogs = Catalogs::default();
        let curse = catalogs
            .omikuji
            .iter()
            .find(|t| t.level == OmikujiLevel::Curse)
            .unwrap();
        let reading = assemble_omikuji(curse, ts());
        assert!(reading.warning.is_some());
        assert_eq!(reading.result.title, "Omikuji: Curse");
    }

    #[test]
    fn numerology_assembly_carries_steps_and_number() {
        let catalogs = Catalogs::default();
        let birth = NaiveDate::from_ymd_opt(1990, 12, 25).unwrap();
        let n = life_path_number(birth);
        let profile = &catalogs.numerology[&n];
        let reading =
            assemble_numerology(birth, n, life_path_steps(1990, 12, 25), profile, ts());
        assert_eq!(reading.life_path, 11);
        assert_eq!(reading.result.title, "Life Path Number 11");
        assert_eq!(reading.result.lucky.as_ref().unwrap().number, Some(11));
        assert_eq!(reading.steps.len(), 2);
    }

    #[test]
    fn record_mode_and_result_accessors() {
        let catalogs = Catalogs::default();
        let reading = assemble_omikuji(&catalogs.omikuji[0], ts());
        let record = FortuneRecord::Omikuji(reading);
        assert_eq!(record.mode(), FortuneMode::Omikuji);
        assert!(record.result().title.starts_with("Omikuji"));
    }

    #[test]
    fn record_serde_round_trip() {
        let catalogs = Catalogs::default();
        let record = FortuneRecord::Omikuji(assemble_omikuji(&catalogs.omikuji[0], ts()));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"mode\":\"omikuji\""));
        let back: FortuneRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
