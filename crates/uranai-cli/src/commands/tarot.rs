use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use uranai_engine::FortuneRecord;
use uranai_engine::tarot::{Spread, draw};

pub fn run(
    cards: u32,
    seed: u64,
    reversal: f64,
    catalog: Option<&Path>,
    history: Option<&Path>,
) -> Result<(), String> {
    let catalogs = super::load_catalogs(catalog)?;
    let spread = Spread::from_count(cards).map_err(|e| e.to_string())?;

    let mut rng = StdRng::seed_from_u64(seed);
    let drawn = draw(spread, &catalogs.tarot, reversal.clamp(0.0, 1.0), &mut rng)
        .map_err(|e| e.to_string())?;
    let reading = uranai_engine::assemble::assemble_tarot(spread, drawn, Utc::now());

    println!("  {} ({spread})", "Tarot Reading".bold());
    println!();
    for card in &reading.cards {
        println!(
            "  [{}] {} {} ({})",
            card.position,
            card.card.symbol,
            card.card.name.bold(),
            card.orientation().dimmed(),
        );
        println!("      {}", card.meaning);
    }
    println!();
    println!("  {}: {}", reading.tone.to_string().bold(), reading.tone.summary());

    super::record_history(history, FortuneRecord::Tarot(reading))
}
