//! Command implementations

pub mod benchmark;
pub mod score;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
