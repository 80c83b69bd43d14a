//! Console rendering for games and command results

use super::formatters::{attempt_counter, create_progress_bar, plain_tiles};
use crate::commands::{BenchmarkResult, ScoreResult};
use crate::core::{Feedback, GuessError, LetterClass, Word};
use crate::game::{GameConfig, Presenter, SessionStatus};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// One letter as a colored tile
fn tile(letter: char, class: LetterClass) -> ColoredString {
    let text = format!(" {letter} ");
    match class {
        LetterClass::Exact => text.black().on_green().bold(),
        LetterClass::Present => text.black().on_yellow().bold(),
        LetterClass::Absent => text.white().on_bright_black(),
    }
}

/// Colored tiles for a whole guess
#[must_use]
pub fn colored_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.iter())
        .map(|(&letter, class)| tile(letter, class).to_string())
        .collect()
}

/// Print the game rules before a line-mode game
pub fn print_rules(config: GameConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!("{}", "  W O R D L E".bright_green().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nGuess the {}-letter word. You have {} attempts.",
        config.word_length.to_string().bright_cyan().bold(),
        config.max_attempts.to_string().bright_cyan().bold()
    );
    println!(
        "  {} letter is in the right position",
        tile('A', LetterClass::Exact)
    );
    println!(
        "  {} letter is in the word, wrong position",
        tile('B', LetterClass::Present)
    );
    println!(
        "  {} letter is not in the word (or used up)",
        tile('C', LetterClass::Absent)
    );
    println!(
        "\nInvalid words don't cost an attempt. Type {} to leave.\n",
        "/quit".bright_white().bold()
    );
}

/// Closing banner, printed whatever the outcome
pub fn print_farewell() {
    println!(
        "{}",
        "*** Thank you for playing the game! ***".red().bold()
    );
}

/// Line-mode presenter writing to stdout
pub struct ConsolePresenter {
    color: bool,
}

impl ConsolePresenter {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn tiles(&self, guess: &Word, feedback: &Feedback) -> String {
        if self.color {
            colored_tiles(guess, feedback)
        } else {
            plain_tiles(guess, feedback)
        }
    }
}

impl Presenter for ConsolePresenter {
    fn round_started(&mut self, attempt: usize, max_attempts: usize) {
        print!(
            "Guess the word ({}): ",
            attempt_counter(attempt, max_attempts)
        );
        // print! does not flush on its own
        io::stdout().flush().ok();
    }

    fn rejected(&mut self, error: &GuessError) {
        println!("{} {error}", "✗".red().bold());
    }

    fn scored(&mut self, guess: &Word, feedback: &Feedback) {
        println!("  {}  {}", self.tiles(guess, feedback), feedback.to_emoji());
    }

    fn finished(&mut self, status: SessionStatus, secret: &Word, attempts_used: usize) {
        let solved: Feedback = secret.letters().iter().map(|_| LetterClass::Exact).collect();
        match status {
            SessionStatus::Won => {
                println!("  {}  {}", self.tiles(secret, &solved), solved.to_emoji());
                println!(
                    "\n{}",
                    format!(
                        "🎉 Solved in {attempts_used} {}!",
                        if attempts_used == 1 { "guess" } else { "guesses" }
                    )
                    .green()
                    .bold()
                );
            }
            SessionStatus::Lost => {
                println!(
                    "\n{} The word was {}",
                    "❌ Out of attempts.".red().bold(),
                    secret.text().bright_yellow().bold()
                );
            }
            SessionStatus::Aborted => println!("\nShutting down ..."),
            SessionStatus::InProgress => {}
        }
    }
}

/// Print the result of the score command
pub fn print_score_result(result: &ScoreResult, color: bool) {
    let tiles = if color {
        colored_tiles(&result.guess, &result.feedback)
    } else {
        plain_tiles(&result.guess, &result.feedback)
    };

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.text().bright_yellow().bold(),
        result.guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {tiles}  {}", result.feedback.to_emoji());
    println!("  Classes: {}", result.feedback);
    println!(
        "  Exact: {}  Present: {}  Absent: {}",
        result.feedback.count(LetterClass::Exact).to_string().green(),
        result.feedback.count(LetterClass::Present).to_string().yellow(),
        result.feedback.count(LetterClass::Absent).to_string().bright_black()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words:            {}", result.total_words);
    println!(
        "   Evaluations:      {}",
        result.evaluations.to_string().bright_yellow().bold()
    );
    println!("   Solved pairs:     {}", result.wins.to_string().green());
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!(
        "   Evaluations/sec:  {:.0}",
        result.evaluations_per_second
    );

    println!("\n🎨 {}", "Classifications:".bright_cyan().bold());
    println!("   Exact:    {}", result.exact.to_string().green());
    println!("   Present:  {}", result.present.to_string().yellow());
    println!("   Absent:   {}", result.absent.to_string().bright_black());

    println!(
        "\n📈 {}",
        "Exact positions per guess:".bright_cyan().bold()
    );
    for (exact, &count) in result.exact_distribution.iter().enumerate() {
        let pct = if result.evaluations > 0 {
            count as f64 / result.evaluations as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {exact}: {} {count:8} ({pct:5.1}%)", bar.green());
    }
}
