//! Boggle Solver - CLI
//!
//! Play word-grid boards in a TUI or line mode, or solve, benchmark and
//! analyze them from the command line.

use anyhow::{Context, Result};
use boggle_solver::{
    commands::{SolveConfig, analyze_dictionary, run_benchmark, run_simple, solve_board},
    config::{DEFAULT_BOARD_SIZE, GameConfig},
    core::Board,
    dictionary::DictionaryIndex,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    wordlists::loader::{embedded_dictionary, load_dictionary},
};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};

/// Largest `--size` the CLI will generate
const MAX_SIZE_FLAG: usize = 256;

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Five-letter word-grid game with a trie-backed solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board side length
    #[arg(short, long, global = true, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Seed for reproducible boards
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Fixed board, rows separated by '/' (e.g. "apple/zzzzz/stone/zzzzz/zzzzz")
    #[arg(short, long, global = true)]
    board: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type coordinates instead of using the TUI)
    Simple,

    /// Find every word on a board
    Solve {
        /// Print the path of each word
        #[arg(short, long)]
        paths: bool,

        /// Search from each start cell in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Solve many random boards and report statistics
    Benchmark {
        /// Number of boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Report on the loaded dictionary
    Analyze,
}

/// Set up logging; `RUST_LOG` takes precedence over `-v`
fn init_logging(verbose: u8, quiet_by_default: bool) {
    let level = match verbose {
        0 if quiet_by_default => LevelFilter::Off,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // A second init is harmless, so the error is ignored
    let _ = pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Load the dictionary selected by the -w flag
fn load_index(wordlist: &str) -> Result<DictionaryIndex> {
    match wordlist {
        "embedded" => embedded_dictionary().context("failed to build embedded dictionary"),
        path => load_dictionary(path).with_context(|| format!("failed to load word list {path}")),
    }
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    anyhow::ensure!(
        (1..=MAX_SIZE_FLAG).contains(&cli.size),
        "--size must be between 1 and {MAX_SIZE_FLAG}, got {}",
        cli.size
    );

    let board = cli
        .board
        .as_deref()
        .map(str::parse::<Board>)
        .transpose()
        .context("invalid --board")?;

    Ok(GameConfig::new()
        .with_size(cli.size)
        .with_seed(cli.seed)
        .with_board(board))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play));

    let config = build_config(&cli)?;
    let index = load_index(&cli.wordlist)?;
    info!(
        "dictionary ready: {} words, {} trie nodes",
        index.trie().len(),
        index.trie().node_count()
    );

    match command {
        Commands::Play => run_play_command(&config, &index),
        Commands::Simple => run_simple(&config, &index),
        Commands::Solve { paths, parallel } => {
            run_solve_command(&config, &index, *paths, *parallel)
        }
        Commands::Benchmark { count } => run_benchmark_command(&config, &index, *count),
        Commands::Analyze => {
            print_analysis_result(&analyze_dictionary(&index));
            Ok(())
        }
    }
}

fn run_solve_command(
    config: &GameConfig,
    index: &DictionaryIndex,
    paths: bool,
    parallel: bool,
) -> Result<()> {
    let mut generator = config.generator();
    let board = config
        .first_board(&mut generator, index.frequencies())
        .context("failed to generate board")?;

    let result = solve_board(board, index.trie(), SolveConfig::new(parallel));
    print_solve_result(&result, paths);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, index: &DictionaryIndex, count: usize) -> Result<()> {
    println!(
        "Solving {count} random {}x{} boards...",
        config.size, config.size
    );

    let result = run_benchmark(config, index, count, true).context("benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(config: &GameConfig, index: &DictionaryIndex) -> Result<()> {
    use boggle_solver::interactive::{App, run_tui};

    let app = App::new(config, index).context("failed to generate board")?;
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_flag_is_bounded() {
        let cli = Cli::try_parse_from(["boggle_solver", "--size", "257", "solve"]).unwrap();
        assert!(build_config(&cli).is_err());

        let cli = Cli::try_parse_from(["boggle_solver", "-s", "40", "solve"]).unwrap();
        assert_eq!(build_config(&cli).unwrap().size, 40);
    }

    #[test]
    fn board_flag_is_parsed() {
        let cli = Cli::try_parse_from(["boggle_solver", "-b", "ab/cd", "solve"]).unwrap();
        let config = build_config(&cli).unwrap();
        assert_eq!(config.board.unwrap().to_string(), "ab/cd");

        let cli = Cli::try_parse_from(["boggle_solver", "-b", "ab/c", "solve"]).unwrap();
        assert!(build_config(&cli).is_err());
    }
}
