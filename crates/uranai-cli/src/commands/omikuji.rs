use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use uranai_engine::FortuneRecord;
use uranai_engine::omikuji::{draw_uniform, draw_weighted};

pub fn run(
    uniform: bool,
    seed: u64,
    catalog: Option<&Path>,
    history: Option<&Path>,
) -> Result<(), String> {
    let catalogs = super::load_catalogs(catalog)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let tier = if uniform {
        draw_uniform(&catalogs.omikuji, &mut rng)
    } else {
        draw_weighted(&catalogs.omikuji, &mut rng)
    }
    .map_err(|e| e.to_string())?
    .clone();

    let reading = uranai_engine::assemble::assemble_omikuji(&tier, Utc::now());

    println!("  {}", reading.result.title.bold());
    println!();
    println!("  {}", reading.result.description);
    println!("  {}", reading.result.advice);
    if let Some(warning) = &reading.warning {
        println!();
        println!("  {} {}", "warning:".yellow(), warning);
    }
    if let Some(lucky) = &reading.result.lucky {
        println!();
        println!("  lucky: {}", super::format_lucky(lucky));
    }

    super::record_history(history, FortuneRecord::Omikuji(reading))
}
