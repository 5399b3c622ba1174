pub mod history;
pub mod numerology;
pub mod omikuji;
pub mod session;
pub mod tarot;
pub mod zodiac;

use std::path::Path;

use chrono::{NaiveDate, Utc};

use uranai_core::{Catalogs, LuckyAttributes};
use uranai_engine::{FortuneRecord, History};

/// Load catalogs, applying overrides from a directory if given.
pub fn load_catalogs(dir: Option<&Path>) -> Result<Catalogs, String> {
    match dir {
        Some(dir) => Catalogs::load(dir).map_err(|e| format!("invalid catalog: {e}")),
        None => Ok(Catalogs::default()),
    }
}

/// Parse a YYYY-MM-DD argument, defaulting to today.
pub fn parse_day(date: Option<&str>) -> Result<NaiveDate, String> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| format!("expected YYYY-MM-DD, got '{s}'")),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Append a completed reading to a history file, if one was given.
pub fn record_history(path: Option<&Path>, record: FortuneRecord) -> Result<(), String> {
    let Some(path) = path else {
        return Ok(());
    };
    let mut history =
        History::load(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    history.push(record, Utc::now());
    history
        .save(path)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))
}

/// Render lucky attributes as one line, or an empty string if all absent.
pub fn format_lucky(lucky: &LuckyAttributes) -> String {
    let mut parts = Vec::new();
    if let Some(color) = &lucky.color {
        parts.push(format!("color {color}"));
    }
    if let Some(number) = lucky.number {
        parts.push(format!("number {number}"));
    }
    if let Some(item) = &lucky.item {
        parts.push(format!("item {item}"));
    }
    if let Some(direction) = &lucky.direction {
        parts.push(format!("direction {direction}"));
    }
    parts.join(", ")
}
