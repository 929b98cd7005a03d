//! Terminal output formatting
//!
//! Board grids and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
pub use formatters::board_grid;
