use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use uranai_engine::{EngineConfig, FortuneSession, History};

pub fn run(
    seed: u64,
    uniform: bool,
    catalog: Option<&Path>,
    history: Option<&Path>,
) -> Result<(), String> {
    let catalogs = super::load_catalogs(catalog)?;
    let config = EngineConfig::default()
        .with_seed(seed)
        .with_weighted_omikuji(!uniform);

    let mut session = FortuneSession::new(catalogs, config)
        .map_err(|e| format!("failed to start session: {e}"))?;

    if let Some(path) = history {
        let loaded = History::load(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        session.set_history(loaded);
    }

    println!("  {} Fortune Session", "Starting".bold());
    println!("  Seed: {seed}");
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    if let Some(path) = history {
        session
            .history()
            .save(path)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    }

    Ok(())
}
