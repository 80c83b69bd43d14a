//! Wordle Game - CLI
//!
//! Terminal word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};
use wordle_game::{
    commands::{run_benchmark, run_simple, score_guess},
    core::Word,
    game::{CancelToken, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig},
    output::{print_benchmark_result, print_farewell, print_score_result},
    wordlists::{WORDS, choose_secret, load_from_file, words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret word with exact duplicate-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (whitespace separated); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Seed for secret selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score one guess against a secret
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Benchmark the evaluator over all word pairs
    Benchmark {
        /// Number of words from the list to pair up
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the word list selected by the -w flag, keeping words of `length`
fn load_words(path: Option<&Path>, length: usize) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path, length)?,
        None => {
            let words = words_from_slice(WORDS, length);
            anyhow::ensure!(
                !words.is_empty(),
                "built-in word list has no {length}-letter words"
            );
            words
        }
    };
    info!(count = words.len(), length, "word list loaded");
    Ok(words)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "seeded secret selection");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Token cancelled by SIGINT/SIGTERM/SIGHUP so a game ends as aborted and the
/// farewell still prints
fn shutdown_token() -> Result<CancelToken> {
    let cancel = CancelToken::new();
    cancel
        .cancel_on_signal()
        .context("failed to install shutdown signal handler")?;
    Ok(cancel)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }
    let color = !cli.no_color;
    let config = GameConfig::new(cli.length, cli.attempts);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let words = load_words(cli.words.as_deref(), cli.length)?;
            let cancel = shutdown_token()?;
            let result = run_play_command(&words, config, make_rng(cli.seed), cancel);
            print_farewell();
            result
        }
        Commands::Simple => {
            let words = load_words(cli.words.as_deref(), cli.length)?;
            let cancel = shutdown_token()?;
            let result = run_simple_command(&words, config, make_rng(cli.seed), color, cancel);
            print_farewell();
            result
        }
        Commands::Score { secret, guess } => {
            let result = score_guess(&secret, &guess)?;
            print_score_result(&result, color);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let words = load_words(cli.words.as_deref(), cli.length)?;
            let sample: Vec<Word> = words.into_iter().take(count).collect();
            println!(
                "Running benchmark on {} words ({} pairs)...",
                sample.len(),
                sample.len() * sample.len()
            );
            let result = run_benchmark(&sample, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    words: &[Word],
    config: GameConfig,
    rng: StdRng,
    cancel: CancelToken,
) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, config, rng, cancel)?;
    let status = run_tui(app)?;
    info!(%status, "tui closed");
    Ok(())
}

fn run_simple_command(
    words: &[Word],
    config: GameConfig,
    mut rng: StdRng,
    color: bool,
    cancel: CancelToken,
) -> Result<()> {
    let secret = choose_secret(words, &mut rng)
        .context("word list is empty")?
        .clone();
    let status = run_simple(secret, config, color, cancel)?;
    info!(%status, "game finished");
    Ok(())
}
