//! Catalog bundle with JSON override loading and validation.
//!
//! A [`Catalogs`] value bundles the four static tables and is passed by
//! reference to the engine; there is no global instance. Deployments may
//! override individual catalogs with JSON files; a missing or unreadable
//! override falls back to the embedded default and is never fatal.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::numerology::{self, NumerologyProfile};
use crate::omikuji::{self, OmikujiTier, WEIGHT_TOLERANCE};
use crate::tarot::{self, TarotCard};
use crate::zodiac::{self, ZodiacSign};

/// The full set of fortune catalogs.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogs {
    /// Tarot card catalog.
    pub tarot: Vec<TarotCard>,
    /// Zodiac sign catalog.
    pub zodiac: Vec<ZodiacSign>,
    /// Omikuji tier catalog.
    pub omikuji: Vec<OmikujiTier>,
    /// Numerology profiles keyed by life-path number.
    pub numerology: BTreeMap<u32, NumerologyProfile>,
}

impl Default for Catalogs {
    fn default() -> Self {
        Self {
            tarot: tarot::default_cards(),
            zodiac: zodiac::default_signs(),
            omikuji: omikuji::default_tiers(),
            numerology: numerology::default_profiles(),
        }
    }
}

impl Catalogs {
    /// Load catalogs from a directory of JSON overrides.
    ///
    /// Looks for `tarot.json`, `zodiac.json`, `omikuji.json`, and
    /// `numerology.json` under `dir`. An absent file uses the embedded
    /// default; an unreadable or malformed file logs a warning and also
    /// falls back to the default. The merged bundle is then validated.
    pub fn load(dir: &Path) -> CoreResult<Self> {
        let catalogs = Self {
            tarot: load_table(dir, "tarot.json", tarot::default_cards),
            zodiac: load_table(dir, "zodiac.json", zodiac::default_signs),
            omikuji: load_table(dir, "omikuji.json", omikuji::default_tiers),
            numerology: load_table(dir, "numerology.json", numerology::default_profiles),
        };
        catalogs.validate()?;
        Ok(catalogs)
    }

    /// Validate catalog invariants: non-empty tables, unique tarot ids,
    /// zodiac ids in 1-12 and unique, omikuji weights summing to 1, and a
    /// numerology profile for every valid life-path number.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tarot.is_empty() {
            return Err(CoreError::EmptyCatalog("tarot"));
        }
        if self.zodiac.is_empty() {
            return Err(CoreError::EmptyCatalog("zodiac"));
        }
        if self.omikuji.is_empty() {
            return Err(CoreError::EmptyCatalog("omikuji"));
        }

        let mut card_ids = std::collections::BTreeSet::new();
        for card in &self.tarot {
            if !card_ids.insert(card.id) {
                return Err(CoreError::DuplicateCardId(card.id));
            }
        }

        let mut sign_ids = std::collections::BTreeSet::new();
        for sign in &self.zodiac {
            if !(1..=12).contains(&sign.id) {
                return Err(CoreError::SignIdOutOfRange(sign.id));
            }
            if !sign_ids.insert(sign.id) {
                return Err(CoreError::DuplicateSignId(sign.id));
            }
        }

        let weight_sum: f64 = self.omikuji.iter().map(|t| t.probability).sum();
        if (weight_sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(CoreError::WeightSum(weight_sum));
        }

        for n in numerology::LIFE_PATH_NUMBERS {
            if !self.numerology.contains_key(n) {
                return Err(CoreError::MissingProfile(*n));
            }
        }

        Ok(())
    }
}

/// Read one catalog override, falling back to the embedded default.
fn load_table<T: DeserializeOwned>(dir: &Path, file: &str, default: fn() -> T) -> T {
    let path = dir.join(file);
    if !path.exists() {
        return default();
    }
    match std::fs::read_to_string(&path) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("malformed catalog override {}: {e}; using default", path.display());
                default()
            }
        },
        Err(e) => {
            log::warn!("unreadable catalog override {}: {e}; using default", path.display());
            default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_pass_validation() {
        Catalogs::default().validate().unwrap();
    }

    #[test]
    fn load_from_empty_dir_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let catalogs = Catalogs::load(dir.path()).unwrap();
        assert_eq!(catalogs, Catalogs::default());
    }

    #[test]
    fn load_from_missing_dir_yields_defaults() {
        let catalogs = Catalogs::load(Path::new("/nonexistent/uranai-data")).unwrap();
        assert_eq!(catalogs, Catalogs::default());
    }

    #[test]
    fn corrupt_override_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("tarot.json")).unwrap();
        f.write_all(b"{ not json").unwrap();

        let catalogs = Catalogs::load(dir.path()).unwrap();
        assert_eq!(catalogs.tarot, tarot::default_cards());
    }

    #[test]
    fn valid_override_replaces_default() {
        let dir = tempfile::tempdir().unwrap();
        let cards = vec![TarotCard {
            id: 0,
            name: "The Fool".to_string(),
            upright_meaning: "beginnings".to_string(),
            reversed_meaning: "recklessness".to_string(),
            symbol: "F".to_string(),
        }];
        std::fs::write(
            dir.path().join("tarot.json"),
            serde_json::to_string(&cards).unwrap(),
        )
        .unwrap();

        let catalogs = Catalogs::load(dir.path()).unwrap();
        assert_eq!(catalogs.tarot, cards);
        // Untouched catalogs keep their defaults
        assert_eq!(catalogs.zodiac, zodiac::default_signs());
    }

    #[test]
    fn duplicate_card_ids_rejected() {
        let mut catalogs = Catalogs::default();
        catalogs.tarot[1].id = 0;
        assert!(matches!(
            catalogs.validate(),
            Err(CoreError::DuplicateCardId(0))
        ));
    }

    #[test]
    fn sign_id_out_of_range_rejected() {
        let mut catalogs = Catalogs::default();
        catalogs.zodiac[0].id = 13;
        assert!(matches!(
            catalogs.validate(),
            Err(CoreError::SignIdOutOfRange(13))
        ));
    }

    #[test]
    fn skewed_omikuji_weights_rejected() {
        let mut catalogs = Catalogs::default();
        catalogs.omikuji[0].probability += 0.5;
        assert!(matches!(catalogs.validate(), Err(CoreError::WeightSum(_))));
    }

    #[test]
    fn missing_numerology_profile_rejected() {
        let mut catalogs = Catalogs::default();
        catalogs.numerology.remove(&22);
        assert!(matches!(
            catalogs.validate(),
            Err(CoreError::MissingProfile(22))
        ));
    }
}
