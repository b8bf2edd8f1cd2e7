//! Wordle Argentino - CLI
//!
//! Terminal Wordle with Argentine-Spanish vocabulary: a ratatui TUI, a plain
//! line mode, persisted statistics, and a mock ranking.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use wordle_argentino::{
    commands::{run_ranking, run_simple, run_stats},
    core::Word,
    leaderboard::SortBy,
    stats::store::StatsStore,
    wordlists::{PALABRAS, loader::{load_from_file, words_from_slice}},
};

#[derive(Parser)]
#[command(
    name = "wordle_argentino",
    about = "Wordle Argentino: adivin\u{e1} la palabra de 5 letras en 6 intentos",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Where player statistics are persisted
    #[arg(long, global = true, default_value = "wordle_stats.json")]
    stats_file: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (play without TUI)
    Simple,

    /// Show your saved statistics
    Stats,

    /// Show the ranking (mock data)
    Ranking {
        /// Sort order for the table
        #[arg(short, long, value_enum, default_value_t = SortBy::Score)]
        sort: SortBy,
    },
}

/// Load the word list based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(PALABRAS),
        path => load_from_file(path)?,
    };

    if words.is_empty() {
        bail!("word list '{wordlist_mode}' contains no valid 5-letter words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;
    let store = StatsStore::new(&cli.stats_file);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, store),
        Commands::Simple => run_simple(&words, &store),
        Commands::Stats => run_stats(&store),
        Commands::Ranking { sort } => run_ranking(&store, sort),
    }
}

fn run_play_command(words: &[Word], store: StatsStore) -> Result<()> {
    use wordle_argentino::interactive::{App, run_tui};

    let app = App::new(words, store)?;
    run_tui(app)
}
