//! Interactive fortune session.
//!
//! `FortuneSession` drives all four divination modes from line-based
//! commands: it runs each draw through the presentation flow, assembles
//! the reading, posts it to the one-shot mailbox, and appends it to the
//! capped history.

use chrono::{Datelike, NaiveDate, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use uranai_core::{Catalogs, CoreError};

use crate::assemble::{
    FortuneMode, FortuneRecord, assemble_numerology, assemble_omikuji, assemble_tarot,
    assemble_zodiac,
};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::flow::Flow;
use crate::numerology::{life_path_number, life_path_steps, validate_birth_date};
use crate::omikuji::{draw_uniform, draw_weighted};
use crate::store::{History, ResultMailbox};
use crate::tarot::{Spread, draw};
use crate::zodiac::{daily_fortune, find_sign};

/// Shakes required before the omikuji box yields a stick.
const OMIKUJI_SHAKES: u32 = 3;

/// An interactive fortune-telling session.
pub struct FortuneSession {
    catalogs: Catalogs,
    config: EngineConfig,
    rng: StdRng,
    mailbox: ResultMailbox,
    history: History,
    today: NaiveDate,
}

impl FortuneSession {
    /// Create a session over a validated catalog bundle.
    pub fn new(catalogs: Catalogs, config: EngineConfig) -> EngineResult<Self> {
        catalogs.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            catalogs,
            config,
            rng,
            mailbox: ResultMailbox::new(),
            history: History::new(),
            today: Utc::now().date_naive(),
        })
    }

    /// Pin "today" for reproducible zodiac fortunes and date validation.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The session's history, most recent first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Replace the history (e.g. one loaded from a file).
    pub fn set_history(&mut self, history: History) {
        self.history = history;
    }

    /// The date this session treats as today.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> EngineResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "tarot" => self.do_tarot(rest),
            "zodiac" => self.do_zodiac(rest),
            "omikuji" => self.do_omikuji(),
            "numerology" => self.do_numerology(rest),
            "last" => self.do_last(rest),
            "history" => self.do_history(),
            "help" => Ok(Self::help_text().to_string()),
            "quit" | "q" => Ok("May fortune walk with you.".to_string()),
            other => Err(EngineError::InvalidChoice(format!(
                "unknown command '{other}', try 'help'"
            ))),
        }
    }

    fn do_tarot(&mut self, rest: &str) -> EngineResult<String> {
        let count: u32 = if rest.is_empty() {
            1
        } else {
            rest.parse()
                .map_err(|_| EngineError::InvalidChoice(format!("usage: tarot [1|3], got '{rest}'")))?
        };
        let spread = Spread::from_count(count)?;

        let mut flow = Flow::new(0);
        flow.begin()?;
        flow.advance()?;
        let cards = draw(
            spread,
            &self.catalogs.tarot,
            self.config.reversal_probability,
            &mut self.rng,
        )?;
        flow.complete()?;

        let reading = assemble_tarot(spread, cards, Utc::now());
        let mut out = format!("--- Tarot ({spread}) ---\n");
        for card in &reading.cards {
            out.push_str(&format!(
                "[{}] {} {} ({})\n  {}\n",
                card.position, card.card.symbol, card.card.name, card.orientation(), card.meaning,
            ));
        }
        out.push_str(&format!(
            "Overall: {}. {}",
            reading.tone,
            reading.tone.summary()
        ));

        self.finish(FortuneRecord::Tarot(reading));
        Ok(out)
    }

    fn do_zodiac(&mut self, rest: &str) -> EngineResult<String> {
        if rest.is_empty() {
            return Err(EngineError::InvalidChoice(
                "usage: zodiac <sign name>".to_string(),
            ));
        }
        let sign = find_sign(&self.catalogs.zodiac, rest)
            .ok_or_else(|| EngineError::UnknownSign(rest.to_string()))?
            .clone();

        let mut flow = Flow::new(0);
        flow.begin()?;
        flow.advance()?;
        let fortune = daily_fortune(&sign, self.today);
        flow.complete()?;

        let reading = assemble_zodiac(&sign, fortune, Utc::now());
        let out = format!(
            "--- {} ({}) ---\n{}\nLove:   {}\nWork:   {}\nHealth: {}\nMoney:  {}\n{}",
            reading.result.title,
            reading.fortune.tier.level,
            reading.fortune.tier.advice,
            reading.fortune.love,
            reading.fortune.work,
            reading.fortune.health,
            reading.fortune.money,
            format_lucky(reading.result.lucky.as_ref()),
        );

        self.finish(FortuneRecord::Zodiac(reading));
        Ok(out)
    }

    fn do_omikuji(&mut self) -> EngineResult<String> {
        let mut flow = Flow::new(OMIKUJI_SHAKES);
        flow.begin()?;

        let mut out = String::new();
        for shake in 1..=OMIKUJI_SHAKES {
            flow.interact()?;
            out.push_str(&format!("You shake the box... ({shake}/{OMIKUJI_SHAKES})\n"));
        }
        flow.advance()?;

        let tier = if self.config.weighted_omikuji {
            draw_weighted(&self.catalogs.omikuji, &mut self.rng)?
        } else {
            draw_uniform(&self.catalogs.omikuji, &mut self.rng)?
        }
        .clone();
        flow.complete()?;

        let reading = assemble_omikuji(&tier, Utc::now());
        out.push_str(&format!(
            "A stick slides out: {}\n{}\n{}",
            reading.level, reading.result.description, reading.result.advice,
        ));
        if let Some(warning) = &reading.warning {
            out.push_str(&format!("\nWarning: {warning}"));
        }
        out.push('\n');
        out.push_str(&format_lucky(reading.result.lucky.as_ref()));

        self.finish(FortuneRecord::Omikuji(reading));
        Ok(out)
    }

    fn do_numerology(&mut self, rest: &str) -> EngineResult<String> {
        let date = NaiveDate::parse_from_str(rest, "%Y-%m-%d")
            .map_err(|_| EngineError::InvalidDate(format!("expected YYYY-MM-DD, got '{rest}'")))?;
        let date = validate_birth_date(
            date.year(),
            date.month(),
            date.day(),
            self.today,
            self.config.min_birth_year,
        )?;

        let mut flow = Flow::new(0);
        flow.begin()?;
        flow.advance()?;
        let number = life_path_number(date);
        let steps = life_path_steps(date.year(), date.month(), date.day());
        let profile = self
            .catalogs
            .numerology
            .get(&number)
            .ok_or(CoreError::MissingProfile(number))?
            .clone();
        flow.complete()?;

        let reading = assemble_numerology(date, number, steps, &profile, Utc::now());
        let mut out = format!("--- Life Path Number {} ---\n", reading.life_path);
        for step in &reading.steps {
            out.push_str(&format!("  {step}\n"));
        }
        out.push_str(&format!(
            "{}\n{}\nLife goal: {}",
            reading.result.description, reading.result.advice, reading.profile.life_goal,
        ));

        self.finish(FortuneRecord::Numerology(reading));
        Ok(out)
    }

    fn do_last(&mut self, rest: &str) -> EngineResult<String> {
        let mode = FortuneMode::parse(rest).ok_or_else(|| {
            EngineError::InvalidChoice("usage: last <tarot|zodiac|omikuji|numerology>".to_string())
        })?;
        match self.mailbox.take(mode) {
            Some(record) => {
                let result = record.result();
                Ok(format!(
                    "{}\n{}\n{}",
                    result.title, result.description, result.advice
                ))
            }
            None => Ok(format!(
                "No stored {mode} result. Returning to the start."
            )),
        }
    }

    fn do_history(&self) -> EngineResult<String> {
        if self.history.is_empty() {
            return Ok("No past readings.".to_string());
        }
        let mut out = format!("Past readings ({}):\n", self.history.len());
        for (i, entry) in self.history.entries().iter().enumerate() {
            out.push_str(&format!(
                "  {}. [{}] {} ({})\n",
                i + 1,
                entry.mode,
                entry.record.result().title,
                entry.created_at.format("%Y-%m-%d %H:%M UTC"),
            ));
        }
        Ok(out.trim_end().to_string())
    }

    /// Post a completed reading to the mailbox and history.
    fn finish(&mut self, record: FortuneRecord) {
        let created_at = record.result().timestamp;
        if let Err(e) = self.mailbox.put(&record) {
            log::warn!("failed to store {} result: {e}", record.mode());
        }
        self.history.push(record, created_at);
    }

    fn help_text() -> &'static str {
        "\
Fortune Commands:
  tarot [1|3]               Draw one card, or past/present/future
  zodiac <sign>             Today's fortune for a sign (e.g. zodiac leo)
  omikuji                   Shake the box and draw a fortune slip
  numerology <YYYY-MM-DD>   Life-path reading for a birth date
  last <mode>               Show and consume the stored result for a mode
  history                   List past readings (newest first, max 10)
  help                      Show this help
  quit                      Exit"
    }
}

/// Render lucky attributes on one line, skipping absent fields.
fn format_lucky(lucky: Option<&uranai_core::LuckyAttributes>) -> String {
    let Some(lucky) = lucky else {
        return String::new();
    };
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
    if parts.is_empty() {
        String::new()
    } else {
        format!("Lucky: {}", parts.join(", "))
    }
}
