use std::path::Path;

use chrono::{Datelike, NaiveDate, Utc};
use colored::Colorize;

use uranai_engine::EngineConfig;
use uranai_engine::numerology::{life_path_number, life_path_steps, validate_birth_date};

use uranai_engine::FortuneRecord;

pub fn run(
    birth_date: &str,
    catalog: Option<&Path>,
    history: Option<&Path>,
) -> Result<(), String> {
    let catalogs = super::load_catalogs(catalog)?;
    let config = EngineConfig::default();

    let parsed = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d")
        .map_err(|_| format!("expected YYYY-MM-DD, got '{birth_date}'"))?;
    let date = validate_birth_date(
        parsed.year(),
        parsed.month(),
        parsed.day(),
        Utc::now().date_naive(),
        config.min_birth_year,
    )
    .map_err(|e| e.to_string())?;

    let number = life_path_number(date);
    let steps = life_path_steps(date.year(), date.month(), date.day());
    let profile = catalogs
        .numerology
        .get(&number)
        .ok_or_else(|| format!("no profile for life path number {number}"))?
        .clone();

    let reading = uranai_engine::assemble::assemble_numerology(
        date,
        number,
        steps,
        &profile,
        Utc::now(),
    );

    println!("  {}", reading.result.title.bold());
    println!();
    for step in &reading.steps {
        println!("  {}", step.dimmed());
    }
    println!();
    println!("  {}", reading.result.description);
    println!("  {}", reading.result.advice);
    println!();
    println!("  strengths:  {}", reading.profile.strengths.join(", "));
    println!("  challenges: {}", reading.profile.challenges.join(", "));
    println!("  life goal:  {}", reading.profile.life_goal);
    if let Some(lucky) = &reading.result.lucky {
        println!();
        println!("  lucky: {}", super::format_lucky(lucky));
    }

    super::record_history(history, FortuneRecord::Numerology(reading))
}
