//! Display functions for command results

use super::formatters::{board_grid, format_path, frequency_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult, show_paths: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Board: {}", result.board.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());
    println!("\n{}", board_grid(&result.board, &[]));

    if result.words.is_empty() {
        println!("{}", "No words on this board.".yellow());
    } else {
        println!(
            "{} {}",
            result.words.len().to_string().bright_green().bold(),
            "words found:".bright_cyan()
        );
        for word in &result.words {
            println!("  {}", word.to_uppercase());
        }
    }

    if show_paths && !result.found.is_empty() {
        println!("\n🧭 {}", "Paths:".bright_cyan().bold());
        for found in &result.found {
            println!("  {}", format_path(&result.board, found.path.as_slice()));
        }
    }

    println!(
        "\n   Branches: {}  Pruned: {}  Time: {:.3}ms",
        result.stats.branches,
        result.stats.dead_ends,
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print the result of dictionary analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Trie:".bright_cyan().bold());
    println!("   Words:       {}", result.word_count.to_string().bright_yellow());
    println!("   Nodes:       {}", result.node_count);
    println!("   Letters:     {}", result.total_letters);
    for (depth, count) in result.prefixes_per_depth.iter().enumerate() {
        println!("   Depth {}:     {count} prefixes", depth + 1);
    }

    println!("\n🔤 {}", "Letter frequencies:".bright_cyan().bold());
    let max_weight = result.frequencies.first().map_or(0.0, |&(_, w)| w);
    for &(letter, weight) in &result.frequencies {
        println!(
            "   {}  {} {:5.2}%",
            letter.to_char().to_ascii_uppercase(),
            frequency_bar(weight, max_weight, 30).green(),
            weight * 100.0
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.total_boards);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!("   Fewest words:     {}", result.min_words.to_string().yellow());
    println!("   Most words:       {}", result.max_words.to_string().green());
    println!("   Branches:         {}", result.total_branches);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.total_boards == 0 {
        return;
    }

    println!("\n📈 {}", "Words per board:".bright_cyan().bold());
    for (&words, &count) in &result.distribution {
        let pct = (count as f64 / result.total_boards as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {words:3}: {bar} {count:4} ({pct:5.1}%)");
    }
}
