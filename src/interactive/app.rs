//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{Board, BoardError, Coord};
use crate::dictionary::DictionaryIndex;
use crate::engine::{BoardGenerator, Found, MoveVerdict, PlaySession, Solver, record_move};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeSet;
use std::io;

/// Application state
pub struct App<'a> {
    index: &'a DictionaryIndex,
    generator: BoardGenerator,
    size: usize,
    pub board: Board,
    pub session: PlaySession,
    pub cursor: Coord,
    /// Cell of the most recent rejected selection, cleared by the next move
    pub rejected: Option<Coord>,
    pub found: BTreeSet<String>,
    /// Every distinct word on the board with its first path, computed per board
    pub answers: Vec<Found>,
    pub show_answers: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub boards_played: usize,
    pub words_found: usize,
}

impl<'a> App<'a> {
    /// Create the app on the configured first board
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if the configured size cannot be generated.
    pub fn new(config: &GameConfig, index: &'a DictionaryIndex) -> Result<Self, BoardError> {
        let mut generator = config.generator();
        let board = config.first_board(&mut generator, index.frequencies())?;
        let answers = Solver::new(&board, index.trie()).find_distinct();

        Ok(Self {
            index,
            generator,
            size: board.size(),
            board,
            session: PlaySession::new(),
            cursor: Coord::new(0, 0),
            rejected: None,
            found: BTreeSet::new(),
            answers,
            show_answers: false,
            messages: vec![
                Message {
                    text: "Trace a five-letter word through adjacent cells.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Move with arrows or hjkl, select with Space or Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                boards_played: 1,
                words_found: 0,
            },
            should_quit: false,
        })
    }

    /// Move the cursor, staying on the board
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let last = self.board.size() as isize - 1;
        self.cursor = Coord::new(
            (self.cursor.row + d_row).clamp(0, last),
            (self.cursor.col + d_col).clamp(0, last),
        );
    }

    /// Select the cell under the cursor
    pub fn select(&mut self) -> MoveVerdict {
        let coord = self.cursor;
        let session = std::mem::take(&mut self.session);
        let outcome = record_move(session, coord, &self.board, self.index.trie());
        self.session = outcome.session;

        match &outcome.verdict {
            MoveVerdict::AlreadySelected => {
                self.add_message(&format!("{coord} is already on the path"), MessageStyle::Error);
            }
            MoveVerdict::Rejected => {
                self.rejected = Some(coord);
                self.add_message(&format!("{coord} leads nowhere"), MessageStyle::Error);
            }
            MoveVerdict::Accepted => {
                self.rejected = None;
            }
            MoveVerdict::Completed(word) => {
                self.rejected = None;
                if self.found.insert(word.clone()) {
                    self.stats.words_found += 1;
                }
                self.add_message(
                    &format!("🎉 Found {}! Press 'r' to trace another.", word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
        }

        outcome.verdict
    }

    /// Clear the current path, keeping the board
    pub fn reset(&mut self) {
        self.session = PlaySession::new();
        self.rejected = None;
        self.add_message("Path cleared", MessageStyle::Info);
    }

    /// Replace the board with a freshly generated one
    pub fn new_board(&mut self) {
        match self.generator.generate(self.size, self.index.frequencies()) {
            Ok(board) => {
                self.answers = Solver::new(&board, self.index.trie()).find_distinct();
                debug!("new board {board} with {} answers", self.answers.len());
                self.board = board;
                self.session = PlaySession::new();
                self.cursor = Coord::new(0, 0);
                self.rejected = None;
                self.found.clear();
                self.stats.boards_played += 1;
                self.add_message("New board!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn toggle_answers(&mut self) {
        self.show_answers = !self.show_answers;
    }

    /// Cells lying on any answer path, empty while answers are hidden
    #[must_use]
    pub fn answer_cells(&self) -> BTreeSet<(isize, isize)> {
        if !self.show_answers {
            return BTreeSet::new();
        }
        self.answers
            .iter()
            .flat_map(|found| found.path.iter())
            .map(|coord| (coord.row, coord.col))
            .collect()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.select();
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('n') => self.new_board(),
            KeyCode::Char('a') => self.toggle_answers(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// The terminal is restored before any error from the event loop is returned.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App<'_>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);
    let restored = restore_terminal(&mut terminal);

    session_result(res, restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// An event-loop error takes precedence over a restore error
fn session_result(run: Result<()>, restore: Result<()>) -> Result<()> {
    run.and(restore)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'_>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
