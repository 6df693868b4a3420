//! Command-line entry point
pub mod commands;
pub mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::config::{AppConfig, DEFAULT_SPEECH_PROGRAM};

#[derive(Parser)]
#[command(name = "quran-explorer")]
#[command(version)]
#[command(
    about = "Look up Qur'an verses by Surah/Ayah or keyword, and recite the Arabic text",
    long_about = None
)]
pub struct Cli {
    /// Corpus JSON file (default: $QURAN_CORPUS, then ./quran_data_full.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// espeak-ng compatible speech command
    #[arg(long, global = true, value_name = "PROG", default_value = DEFAULT_SPEECH_PROGRAM)]
    pub voice_command: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file (the interactive UI discards logs otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one query: "Surah:2 Ayah:255" or free-text keywords
    Search {
        /// Query words, joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Recite the Arabic text afterwards (direct lookups only)
        #[arg(long)]
        recite: bool,

        /// Export the session history to this CSV file
        #[arg(long, value_name = "CSV")]
        export: Option<PathBuf>,
    },
    /// Print every ayah of a surah
    Surah {
        /// Surah number
        number: u32,
    },
    /// List all surahs
    Surahs,
    /// Show corpus statistics
    Stats,
    /// List the speech engine's voices and the selected Arabic voice
    Voices,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let interactive = cli.command.is_none();
    logging::init_logging(cli.verbose, cli.log_file.as_deref(), interactive)?;

    let config = AppConfig::new(cli.corpus, Some(cli.voice_command));

    match cli.command {
        None => commands::interactive(&config),
        Some(Commands::Search { query, recite, export }) => {
            commands::search(&config, &query.join(" "), recite, export.as_deref())
        }
        Some(Commands::Surah { number }) => commands::show_surah(&config, number),
        Some(Commands::Surahs) => commands::list_surahs(&config),
        Some(Commands::Stats) => commands::show_stats(&config),
        Some(Commands::Voices) => commands::show_voices(&config),
    }
}
