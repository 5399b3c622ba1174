use std::path::Path;

use chrono::Utc;
use colored::Colorize;

use uranai_engine::FortuneRecord;
use uranai_engine::zodiac::{daily_fortune, find_sign};

pub fn run(
    sign: &str,
    date: Option<&str>,
    catalog: Option<&Path>,
    history: Option<&Path>,
) -> Result<(), String> {
    let catalogs = super::load_catalogs(catalog)?;
    let day = super::parse_day(date)?;

    let sign = find_sign(&catalogs.zodiac, sign)
        .ok_or_else(|| format!("unknown zodiac sign: {sign}"))?
        .clone();

    let fortune = daily_fortune(&sign, day);
    let reading = uranai_engine::assemble::assemble_zodiac(&sign, fortune, Utc::now());

    println!(
        "  {} for {}",
        sign.name.bold(),
        day.format("%Y-%m-%d").to_string().dimmed()
    );
    println!();
    println!("  Overall: {}", reading.fortune.tier.level.to_string().bold());
    println!("  {}", reading.fortune.tier.advice);
    println!();
    println!("  love:   {}", reading.fortune.love);
    println!("  work:   {}", reading.fortune.work);
    println!("  health: {}", reading.fortune.health);
    println!("  money:  {}", reading.fortune.money);

    if let Some(lucky) = &reading.result.lucky {
        println!();
        println!("  lucky: {}", super::format_lucky(lucky));
    }

    super::record_history(history, FortuneRecord::Zodiac(reading))
}
