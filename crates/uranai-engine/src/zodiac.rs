//! Daily zodiac fortune.
//!
//! The daily contract here is deterministic: the tier index is
//! `(day_of_year + sign id) mod 5` into the fixed five-level table, so the
//! same sign on the same calendar day always receives the same fortune.
//! The per-category messages derive from the same index, which keeps one
//! deployment from mixing per-visit randomness into a daily-stable result.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use uranai_core::zodiac::{
    HEALTH_MESSAGES, LOVE_MESSAGES, MONEY_MESSAGES, WORK_MESSAGES,
};
use uranai_core::{DailyTier, LuckyAttributes, ZodiacSign};

/// Compass directions the daily lucky direction cycles through.
const DIRECTIONS: &[&str] = &["north", "south", "east", "west"];

/// One day's fortune for a sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFortune {
    /// The fortune tier for the day.
    pub tier: DailyTier,
    /// Love outlook.
    pub love: String,
    /// Work outlook.
    pub work: String,
    /// Health outlook.
    pub health: String,
    /// Money outlook.
    pub money: String,
    /// Lucky attributes for the day (tier lucky plus a direction).
    pub lucky: LuckyAttributes,
}

/// Look up a sign by name, case-insensitively.
pub fn find_sign<'a>(signs: &'a [ZodiacSign], name: &str) -> Option<&'a ZodiacSign> {
    signs
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
}

/// Compute the daily fortune for a sign on a given date.
///
/// Stable for a (sign, date) pair; no randomness.
pub fn daily_fortune(sign: &ZodiacSign, date: NaiveDate) -> DailyFortune {
    let base = date.ordinal() + sign.id;
    let idx = (base % 5) as usize;
    let tier = uranai_core::zodiac::daily_tiers()[idx].clone();

    let lucky = LuckyAttributes {
        direction: Some(DIRECTIONS[(base % 4) as usize].to_string()),
        ..tier.lucky.clone()
    };

    DailyFortune {
        love: LOVE_MESSAGES[idx].to_string(),
        work: WORK_MESSAGES[idx].to_string(),
        health: HEALTH_MESSAGES[idx].to_string(),
        money: MONEY_MESSAGES[idx].to_string(),
        tier,
        lucky,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uranai_core::zodiac::default_signs;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn find_sign_is_case_insensitive() {
        let signs = default_signs();
        assert_eq!(find_sign(&signs, "aries").unwrap().id, 1);
        assert_eq!(find_sign(&signs, "  PISCES ").unwrap().id, 12);
        assert!(find_sign(&signs, "ophiuchus").is_none());
    }

    #[test]
    fn same_sign_same_day_is_stable() {
        let signs = default_signs();
        let day = date(2026, 8, 23);
        let a = daily_fortune(&signs[3], day);
        let b = daily_fortune(&signs[3], day);
        assert_eq!(a, b);
    }

    #[test]
    fn tier_follows_day_of_year_plus_id() {
        let signs = default_signs();
        // 2026-01-10 has ordinal 10; Aries id 1 -> (10+1) % 5 = 1 -> Good
        let fortune = daily_fortune(&signs[0], date(2026, 1, 10));
        assert_eq!(fortune.tier.level, uranai_core::DailyTierLevel::Good);
    }

    #[test]
    fn different_signs_can_differ_on_one_day() {
        let signs = default_signs();
        let day = date(2026, 8, 23);
        let a = daily_fortune(&signs[0], day);
        let b = daily_fortune(&signs[1], day);
        assert_ne!(a.tier.level, b.tier.level);
    }

    #[test]
    fn categories_align_with_tier_index() {
        let signs = default_signs();
        let fortune = daily_fortune(&signs[0], date(2026, 1, 10));
        assert_eq!(fortune.love, LOVE_MESSAGES[1]);
        assert_eq!(fortune.work, WORK_MESSAGES[1]);
        assert_eq!(fortune.health, HEALTH_MESSAGES[1]);
        assert_eq!(fortune.money, MONEY_MESSAGES[1]);
    }

    #[test]
    fn lucky_direction_is_set() {
        let signs = default_signs();
        let fortune = daily_fortune(&signs[5], date(2026, 8, 23));
        let dir = fortune.lucky.direction.as_deref().unwrap();
        assert!(DIRECTIONS.contains(&dir));
        // tier lucky fields survive the direction merge
        assert!(fortune.lucky.color.is_some());
        assert!(fortune.lucky.number.is_some());
    }
}
