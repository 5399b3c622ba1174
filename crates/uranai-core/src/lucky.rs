//! Lucky attribute bundle attached to fortune results.

use serde::{Deserialize, Serialize};

/// Optional lucky attributes carried by a fortune result.
///
/// Every field is optional: an omikuji tier carries a color, number, and
/// item; a zodiac fortune adds a direction; a numerology profile only a
/// color and item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LuckyAttributes {
    /// Lucky color, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Lucky number, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Lucky item, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    /// Lucky compass direction, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

impl LuckyAttributes {
    /// Bundle a color, number, and item (the common tier shape).
    pub fn new(color: &str, number: u32, item: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            number: Some(number),
            item: Some(item.to_string()),
            direction: None,
        }
    }

    /// Attach a compass direction.
    #[must_use]
    pub fn with_direction(mut self, direction: &str) -> Self {
        self.direction = Some(direction.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_common_fields() {
        let lucky = LuckyAttributes::new("gold", 7, "mirror");
        assert_eq!(lucky.color.as_deref(), Some("gold"));
        assert_eq!(lucky.number, Some(7));
        assert_eq!(lucky.item.as_deref(), Some("mirror"));
        assert!(lucky.direction.is_none());
    }

    #[test]
    fn none_fields_are_skipped_in_json() {
        let json = serde_json::to_string(&LuckyAttributes::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn direction_round_trips() {
        let lucky = LuckyAttributes::new("red", 3, "bell").with_direction("north");
        let json = serde_json::to_string(&lucky).unwrap();
        let back: LuckyAttributes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lucky);
    }
}
