//! Simple interactive CLI mode
//!
//! Text-based play without TUI: type coordinates to trace a word.

use crate::config::GameConfig;
use crate::core::{Board, BoardError, Coord};
use crate::dictionary::DictionaryIndex;
use crate::engine::{BoardGenerator, MoveVerdict, PlaySession, Solver, record_move};
use crate::output::formatters::board_grid;
use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeSet;
use std::io::{self, Write};

/// What a line of input did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Move(Coord, MoveVerdict),
    Reset,
    NewBoard,
    ShowBoard,
    Solved(BTreeSet<String>),
    Help,
    Quit,
    Invalid(String),
}

/// Line-mode game state
pub struct SimpleGame<'a> {
    index: &'a DictionaryIndex,
    generator: BoardGenerator,
    size: usize,
    board: Board,
    session: PlaySession,
    found: BTreeSet<String>,
}

impl<'a> SimpleGame<'a> {
    /// Start a game on the configured board
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if the configured size cannot be generated.
    pub fn new(config: &GameConfig, index: &'a DictionaryIndex) -> Result<Self, BoardError> {
        let mut generator = config.generator();
        let board = config.first_board(&mut generator, index.frequencies())?;
        Ok(Self {
            index,
            generator,
            size: board.size(),
            board,
            session: PlaySession::new(),
            found: BTreeSet::new(),
        })
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn session(&self) -> &PlaySession {
        &self.session
    }

    /// Words completed on the current board
    #[must_use]
    pub const fn found(&self) -> &BTreeSet<String> {
        &self.found
    }

    /// Apply one line of input
    pub fn handle(&mut self, input: &str) -> Action {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Action::Quit,
            "reset" | "r" => {
                self.session = PlaySession::new();
                Action::Reset
            }
            "new" | "n" => match self.generator.generate(self.size, self.index.frequencies()) {
                Ok(board) => {
                    self.board = board;
                    self.session = PlaySession::new();
                    self.found.clear();
                    Action::NewBoard
                }
                Err(e) => Action::Invalid(e.to_string()),
            },
            "board" | "b" => Action::ShowBoard,
            "solve" | "s" => Action::Solved(Solver::new(&self.board, self.index.trie()).solve()),
            "help" | "h" | "?" => Action::Help,
            other => match other.parse::<Coord>() {
                Ok(coord) => {
                    let session = std::mem::take(&mut self.session);
                    let outcome = record_move(session, coord, &self.board, self.index.trie());
                    self.session = outcome.session;
                    if let MoveVerdict::Completed(word) = &outcome.verdict {
                        self.found.insert(word.clone());
                    }
                    Action::Move(coord, outcome.verdict)
                }
                Err(e) => Action::Invalid(e.to_string()),
            },
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the board cannot be generated or there's an I/O error
/// reading user input.
pub fn run_simple(config: &GameConfig, index: &DictionaryIndex) -> Result<()> {
    let mut game = SimpleGame::new(config, index)?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Word Grid - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();
    println!("\n{}", board_grid(game.board(), game.session().path().as_slice()));

    loop {
        let input = get_user_input("Move")?;
        match game.handle(&input) {
            Action::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Action::Move(coord, verdict) => print_move(&game, coord, &verdict),
            Action::Reset => {
                println!("🔄 Path cleared.\n");
                println!("{}", board_grid(game.board(), &[]));
            }
            Action::NewBoard => {
                println!("🎲 New board!\n");
                println!("{}", board_grid(game.board(), &[]));
            }
            Action::ShowBoard => {
                println!("{}", board_grid(game.board(), game.session().path().as_slice()));
            }
            Action::Solved(words) => {
                println!("\n{} words on this board:", words.len().to_string().bright_cyan());
                for word in &words {
                    let marker = if game.found().contains(word) { "✓" } else { " " };
                    println!("  {marker} {}", word.to_uppercase());
                }
                println!();
            }
            Action::Help => print_help(),
            Action::Invalid(reason) => println!("❌ {reason}\n"),
        }
    }
}

fn print_move(game: &SimpleGame<'_>, coord: Coord, verdict: &MoveVerdict) {
    match verdict {
        MoveVerdict::AlreadySelected => println!("You already selected {coord}!\n"),
        MoveVerdict::Rejected => println!("{} {coord} leads nowhere\n", "✗".red().bold()),
        MoveVerdict::Accepted => {
            println!(
                "{} {}",
                "✓".green().bold(),
                game.session().word().to_uppercase().bright_white().bold()
            );
            println!("{}", board_grid(game.board(), game.session().path().as_slice()));
        }
        MoveVerdict::Completed(word) => {
            println!("{}", board_grid(game.board(), game.session().path().as_slice()));
            println!(
                "{}",
                format!("🎉 Congratulations! You found the word: {}", word.to_uppercase())
                    .bright_green()
                    .bold()
            );
            println!("Type 'reset' to trace another word.\n");
        }
    }
}

fn print_help() {
    println!("Trace five-letter words by entering cells one at a time as 'row col'.");
    println!("Each step must move up, down, left or right.\n");
    println!("Commands: 'reset' clear path, 'new' new board, 'solve' show all words,");
    println!("          'board' redraw, 'quit' to exit");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> DictionaryIndex {
        DictionaryIndex::build(["apple", "stone"]).unwrap()
    }

    fn config() -> GameConfig {
        let board = "apple/zzzzz/stone/zzzzz/zzzzz".parse().unwrap();
        GameConfig::new().with_seed(Some(1)).with_board(Some(board))
    }

    #[test]
    fn coordinates_drive_moves() {
        let index = setup();
        let mut game = SimpleGame::new(&config(), &index).unwrap();

        assert_eq!(
            game.handle("0 0"),
            Action::Move(Coord::new(0, 0), MoveVerdict::Accepted)
        );
        assert_eq!(
            game.handle("1 1"),
            Action::Move(Coord::new(1, 1), MoveVerdict::Rejected)
        );
        assert_eq!(
            game.handle("0,0"),
            Action::Move(Coord::new(0, 0), MoveVerdict::AlreadySelected)
        );
        assert_eq!(game.session().word(), "a");
    }

    #[test]
    fn completing_a_word_records_it() {
        let index = setup();
        let mut game = SimpleGame::new(&config(), &index).unwrap();
        for col in 0..4 {
            game.handle(&format!("0 {col}"));
        }
        assert_eq!(
            game.handle("0 4"),
            Action::Move(Coord::new(0, 4), MoveVerdict::Completed("apple".to_string()))
        );
        assert!(game.found().contains("apple"));
    }

    #[test]
    fn reset_keeps_board_and_clears_path() {
        let index = setup();
        let mut game = SimpleGame::new(&config(), &index).unwrap();
        let board = game.board().clone();
        game.handle("2 0");
        assert_eq!(game.handle("reset"), Action::Reset);
        assert!(game.session().path().is_empty());
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn new_board_replaces_board_and_found_words() {
        let index = setup();
        let mut game = SimpleGame::new(&config(), &index).unwrap();
        for col in 0..5 {
            game.handle(&format!("0 {col}"));
        }
        assert_eq!(game.handle("new"), Action::NewBoard);
        assert!(game.found().is_empty());
        assert!(game.session().path().is_empty());
        assert_eq!(game.board().size(), 5);
    }

    #[test]
    fn solve_lists_all_words() {
        let index = setup();
        let mut game = SimpleGame::new(&config(), &index).unwrap();
        match game.handle("solve") {
            Action::Solved(words) => {
                assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["apple", "stone"]);
            }
            other => panic!("expected Solved, got {other:?}"),
        }
    }

    #[test]
    fn commands_are_case_insensitive() {
        let index = setup();
        let mut game = SimpleGame::new(&config(), &index).unwrap();
        assert_eq!(game.handle("QUIT"), Action::Quit);
        assert_eq!(game.handle(" Board "), Action::ShowBoard);
        assert_eq!(game.handle("?"), Action::Help);
    }

    #[test]
    fn garbage_is_invalid() {
        let index = setup();
        let mut game = SimpleGame::new(&config(), &index).unwrap();
        assert!(matches!(game.handle("left"), Action::Invalid(_)));
    }
}
