//! Benchmark command
//!
//! Generates and solves many random boards to measure solver throughput and
//! how word-rich the generated boards are.

use crate::config::GameConfig;
use crate::core::BoardError;
use crate::dictionary::DictionaryIndex;
use crate::engine::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Words-per-board -> number of boards
    pub distribution: BTreeMap<usize, usize>,
    pub total_branches: usize,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Solve `count` freshly generated boards
///
/// Boards come from the config's generator, so a seeded config benchmarks the
/// same boards every run.
///
/// # Errors
///
/// Returns `BoardError` if the configured board size cannot be generated.
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a fixed literal).
pub fn run_benchmark(
    config: &GameConfig,
    index: &DictionaryIndex,
    count: usize,
    show_progress: bool,
) -> Result<BenchmarkResult, BoardError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut generator = config.generator();
    let mut total_words = 0;
    let mut total_branches = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    let start = Instant::now();

    for _ in 0..count {
        let board = generator.generate(config.size, index.frequencies())?;
        let (words, stats) = Solver::new(&board, index.trie()).solve_with_stats();
        let words = words.len();
        total_branches += stats.branches;

        total_words += words;
        min_words = min_words.min(words);
        max_words = max_words.max(words);
        *distribution.entry(words).or_insert(0) += 1;

        pb.set_message(format!("{words} words"));
        pb.inc(1);
    }

    pb.finish_and_clear();
    let duration = start.elapsed();

    if count == 0 {
        min_words = 0;
    }

    Ok(BenchmarkResult {
        total_boards: count,
        total_words,
        average_words: if count > 0 {
            total_words as f64 / count as f64
        } else {
            0.0
        },
        min_words,
        max_words,
        distribution,
        total_branches,
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::embedded_dictionary;

    #[test]
    fn benchmark_runs() {
        let index = embedded_dictionary().unwrap();
        let config = GameConfig::new().with_seed(Some(1));
        let result = run_benchmark(&config, &index, 10, false).unwrap();

        assert_eq!(result.total_boards, 10);
        assert!(result.min_words <= result.max_words);
        assert!(result.total_branches >= 10 * 25);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let index = embedded_dictionary().unwrap();
        let config = GameConfig::new().with_seed(Some(2));
        let result = run_benchmark(&config, &index, 10, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_boards);

        let weighted: usize = result.distribution.iter().map(|(w, n)| w * n).sum();
        assert_eq!(weighted, result.total_words);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let index = embedded_dictionary().unwrap();
        let config = GameConfig::new().with_seed(Some(3)).with_size(4);
        let result = run_benchmark(&config, &index, 8, false).unwrap();

        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);
    }

    #[test]
    fn seeded_benchmarks_repeat() {
        let index = embedded_dictionary().unwrap();
        let config = GameConfig::new().with_seed(Some(4));
        let a = run_benchmark(&config, &index, 5, false).unwrap();
        let b = run_benchmark(&config, &index, 5, false).unwrap();
        assert_eq!(a.total_words, b.total_words);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn totals_match_solving_the_same_boards_directly() {
        let index = embedded_dictionary().unwrap();
        let config = GameConfig::new().with_seed(Some(5));
        let result = run_benchmark(&config, &index, 6, false).unwrap();

        let mut generator = config.generator();
        let mut words = 0;
        let mut branches = 0;
        for _ in 0..6 {
            let board = generator.generate(config.size, index.frequencies()).unwrap();
            let solver = Solver::new(&board, index.trie());
            words += solver.solve().len();
            branches += solver.stats().branches;
        }
        assert_eq!(result.total_words, words);
        assert_eq!(result.total_branches, branches);
    }

    #[test]
    fn benchmark_zero_boards() {
        let index = embedded_dictionary().unwrap();
        let result = run_benchmark(&GameConfig::new(), &index, 0, false).unwrap();

        assert_eq!(result.total_boards, 0);
        assert_eq!(result.total_words, 0);
        assert_eq!(result.min_words, 0);
    }

    #[test]
    fn benchmark_invalid_size_errors() {
        let index = embedded_dictionary().unwrap();
        let config = GameConfig::new().with_size(0);
        assert!(run_benchmark(&config, &index, 3, false).is_err());
    }
}
