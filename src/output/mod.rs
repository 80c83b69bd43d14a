//! Terminal output formatting
//!
//! Display utilities for line-mode games and CLI results.

pub mod display;
pub mod formatters;

pub use display::{
    ConsolePresenter, colored_tiles, print_benchmark_result, print_farewell, print_rules,
    print_score_result,
};
