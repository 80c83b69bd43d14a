//! Benchmark command
//!
//! Scores every (secret, guess) pair of a word list in parallel and reports
//! throughput and classification totals.

use crate::core::{LetterClass, Word, evaluate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub evaluations: usize,
    pub wins: usize,
    pub exact: usize,
    pub present: usize,
    pub absent: usize,
    /// Index = number of `Exact` positions in a guess
    pub exact_distribution: Vec<usize>,
    pub duration: Duration,
    pub evaluations_per_second: f64,
}

/// Running totals for a slice of the pair space
#[derive(Debug, Clone, Default)]
struct Tally {
    evaluations: usize,
    wins: usize,
    exact: usize,
    present: usize,
    absent: usize,
    exact_distribution: Vec<usize>,
}

impl Tally {
    fn new(word_length: usize) -> Self {
        Self {
            exact_distribution: vec![0; word_length + 1],
            ..Self::default()
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.evaluations += other.evaluations;
        self.wins += other.wins;
        self.exact += other.exact;
        self.present += other.present;
        self.absent += other.absent;
        if self.exact_distribution.len() < other.exact_distribution.len() {
            self.exact_distribution
                .resize(other.exact_distribution.len(), 0);
        }
        for (slot, count) in self
            .exact_distribution
            .iter_mut()
            .zip(other.exact_distribution)
        {
            *slot += count;
        }
        self
    }
}

/// Score every secret in `words` against every guess in `words`
///
/// Pairs of differing length are skipped. The progress bar is drawn only
/// when `show_progress` is set.
#[must_use]
pub fn run_benchmark(words: &[Word], show_progress: bool) -> BenchmarkResult {
    let word_length = words.iter().map(Word::len).max().unwrap_or(0);

    let pb = if show_progress {
        ProgressBar::new(words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} secrets ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let tally = words
        .par_iter()
        .map(|secret| {
            let mut tally = Tally::new(word_length);
            for guess in words {
                let Ok(feedback) = evaluate(secret, guess) else {
                    continue;
                };
                let exact = feedback.count(LetterClass::Exact);
                tally.evaluations += 1;
                tally.exact += exact;
                tally.present += feedback.count(LetterClass::Present);
                tally.absent += feedback.count(LetterClass::Absent);
                tally.exact_distribution[exact] += 1;
                if feedback.is_win() {
                    tally.wins += 1;
                }
            }
            pb.inc(1);
            tally
        })
        .reduce(|| Tally::new(word_length), Tally::merge);

    pb.finish_and_clear();
    let duration = start.elapsed();
    info!(
        words = words.len(),
        evaluations = tally.evaluations,
        elapsed_ms = duration.as_millis() as u64,
        "benchmark finished"
    );

    let secs = duration.as_secs_f64();
    BenchmarkResult {
        total_words: words.len(),
        evaluations: tally.evaluations,
        wins: tally.wins,
        exact: tally.exact,
        present: tally.present,
        absent: tally.absent,
        exact_distribution: tally.exact_distribution,
        duration,
        evaluations_per_second: if secs > 0.0 {
            tally.evaluations as f64 / secs
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_scores_every_pair() {
        let words = words_from_slice(&WORDS[..20], 5);
        let result = run_benchmark(&words, false);

        assert_eq!(result.total_words, 20);
        assert_eq!(result.evaluations, 400);
        // Each word wins only against itself
        assert_eq!(result.wins, 20);
        assert_eq!(result.exact_distribution[5], 20);
    }

    #[test]
    fn benchmark_class_totals_cover_every_position() {
        let words = words_from_slice(&WORDS[..15], 5);
        let result = run_benchmark(&words, false);

        assert_eq!(
            result.exact + result.present + result.absent,
            result.evaluations * 5
        );
        let distribution_sum: usize = result.exact_distribution.iter().sum();
        assert_eq!(distribution_sum, result.evaluations);
    }

    #[test]
    fn benchmark_skips_mismatched_lengths() {
        let words = words_from_slice(&["water", "otter"], 5)
            .into_iter()
            .chain(words_from_slice(&["cat"], 3))
            .collect::<Vec<_>>();
        let result = run_benchmark(&words, false);

        // 2x2 five-letter pairs plus CAT against itself
        assert_eq!(result.evaluations, 5);
        assert_eq!(result.wins, 3);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let result = run_benchmark(&[], false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.evaluations, 0);
        assert_eq!(result.wins, 0);
    }
}
