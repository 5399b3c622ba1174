//! CLI frontend for the uranai fortune-telling engine.

mod commands;

use std::fs::File;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(
    name = "uranai",
    about = "uranai — tarot, zodiac, omikuji, and numerology fortunes",
    version,
    propagate_version = true
)]
struct Cli {
    /// Write a debug log to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw tarot cards (a single card, or past/present/future)
    Tarot {
        /// Number of cards to draw: 1 or 3
        #[arg(short, long, default_value = "1")]
        cards: u32,

        /// RNG seed for a reproducible draw
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Probability that a card lands reversed
        #[arg(long, default_value = "0.3")]
        reversal: f64,

        /// Directory with catalog override files
        #[arg(short = 'd', long)]
        catalog: Option<PathBuf>,

        /// History file to append the reading to
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Today's fortune for a zodiac sign
    Zodiac {
        /// Sign name (case-insensitive, e.g. leo)
        sign: String,

        /// Day to read, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Directory with catalog override files
        #[arg(short = 'd', long)]
        catalog: Option<PathBuf>,

        /// History file to append the reading to
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Shake the box and draw a fortune slip
    Omikuji {
        /// Select tiers uniformly instead of by weight
        #[arg(long)]
        uniform: bool,

        /// RNG seed for a reproducible draw
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Directory with catalog override files
        #[arg(short = 'd', long)]
        catalog: Option<PathBuf>,

        /// History file to append the reading to
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Life-path reading for a birth date
    Numerology {
        /// Birth date, YYYY-MM-DD
        birth_date: String,

        /// Directory with catalog override files
        #[arg(short = 'd', long)]
        catalog: Option<PathBuf>,

        /// History file to append the reading to
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// List past readings from a history file
    History {
        /// History file to read
        #[arg(short, long, default_value = "fortune-history.json")]
        file: PathBuf,
    },

    /// Start an interactive fortune session
    Session {
        /// RNG seed for reproducible draws
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Select omikuji tiers uniformly instead of by weight
        #[arg(long)]
        uniform: bool,

        /// Directory with catalog override files
        #[arg(short = 'd', long)]
        catalog: Option<PathBuf>,

        /// History file loaded at start and saved on quit
        #[arg(long)]
        history: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        if let Ok(log_file) = File::create(path) {
            let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
        }
    }
    log::debug!("uranai starting");

    let result = match cli.command {
        Commands::Tarot {
            cards,
            seed,
            reversal,
            catalog,
            history,
        } => commands::tarot::run(cards, seed, reversal, catalog.as_deref(), history.as_deref()),
        Commands::Zodiac {
            sign,
            date,
            catalog,
            history,
        } => commands::zodiac::run(&sign, date.as_deref(), catalog.as_deref(), history.as_deref()),
        Commands::Omikuji {
            uniform,
            seed,
            catalog,
            history,
        } => commands::omikuji::run(uniform, seed, catalog.as_deref(), history.as_deref()),
        Commands::Numerology {
            birth_date,
            catalog,
            history,
        } => commands::numerology::run(&birth_date, catalog.as_deref(), history.as_deref()),
        Commands::History { file } => commands::history::run(&file),
        Commands::Session {
            seed,
            uniform,
            catalog,
            history,
        } => commands::session::run(seed, uniform, catalog.as_deref(), history.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
