//! Interactive play state
//!
//! A play session is the path being traced, the letters spelled so far and
//! whether this play already completed a word. Sessions are plain values:
//! `record_move` takes one and hands back the next, so there is no shared
//! state to clear between plays. Resetting is `PlaySession::default()`.

use super::moves::{MoveResult, check_solution};
use super::path::Path;
use crate::core::{Board, Coord, Letter};
use crate::dictionary::Trie;
use log::debug;

/// State of one play on one board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaySession {
    path: Path,
    word: String,
    completed: bool,
}

impl PlaySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Letters spelled by the accepted moves so far
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// True once this play has spelled a complete word
    #[inline]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }
}

/// What happened to a single selected cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveVerdict {
    /// The cell is already on the path; nothing changes
    AlreadySelected,
    /// The move is off the path's reach or leads nowhere in the dictionary
    Rejected,
    /// The move extends a valid prefix
    Accepted,
    /// The move completes a word (reported once per play)
    Completed(String),
}

/// The session after a move, plus the verdict to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub session: PlaySession,
    pub verdict: MoveVerdict,
}

/// Try to extend the session's path with `coord`
///
/// Rejected and repeated moves hand the session back unchanged. There is no
/// automatic reset after a completed word; the caller decides when to start a
/// fresh session.
///
/// # Examples
/// ```
/// use boggle_solver::core::{Board, Coord};
/// use boggle_solver::dictionary::DictionaryIndex;
/// use boggle_solver::engine::{MoveVerdict, PlaySession, record_move};
///
/// let index = DictionaryIndex::build(["apple"]).unwrap();
/// let board: Board = "apple/zzzzz/zzzzz/zzzzz/zzzzz".parse().unwrap();
///
/// let mut session = PlaySession::new();
/// for col in 0..4 {
///     let outcome = record_move(session, Coord::new(0, col), &board, index.trie());
///     assert_eq!(outcome.verdict, MoveVerdict::Accepted);
///     session = outcome.session;
/// }
/// let outcome = record_move(session, Coord::new(0, 4), &board, index.trie());
/// assert_eq!(outcome.verdict, MoveVerdict::Completed("apple".to_string()));
/// ```
#[must_use]
pub fn record_move(session: PlaySession, coord: Coord, board: &Board, trie: &Trie) -> MoveOutcome {
    if session.path.contains(coord) {
        return MoveOutcome {
            session,
            verdict: MoveVerdict::AlreadySelected,
        };
    }

    let Some(path) = session.path.extended(coord) else {
        return MoveOutcome {
            session,
            verdict: MoveVerdict::Rejected,
        };
    };

    let result = check_solution(path.as_slice(), board, trie);
    if result.is_dead_end() {
        return MoveOutcome {
            session,
            verdict: MoveVerdict::Rejected,
        };
    }

    let mut word = session.word;
    word.extend(board.letter_at(coord).map(Letter::to_char));

    let verdict = match result {
        MoveResult::Word(text) if !session.completed => {
            debug!("completed '{text}' via {path}");
            MoveVerdict::Completed(text.to_string())
        }
        _ => MoveVerdict::Accepted,
    };
    let completed = session.completed || result.is_word();

    MoveOutcome {
        session: PlaySession {
            path,
            word,
            completed,
        },
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryIndex;

    fn setup() -> (Board, DictionaryIndex) {
        let board = "apple/pzzzz/pzzzz/lzzzz/ezzzz".parse().unwrap();
        let index = DictionaryIndex::build(["apple", "apply"]).unwrap();
        (board, index)
    }

    fn play(moves: &[(isize, isize)], board: &Board, index: &DictionaryIndex) -> MoveOutcome {
        let mut outcome = MoveOutcome {
            session: PlaySession::new(),
            verdict: MoveVerdict::Rejected,
        };
        for &(row, col) in moves {
            outcome = record_move(outcome.session, Coord::new(row, col), board, index.trie());
        }
        outcome
    }

    #[test]
    fn accepted_moves_extend_path_and_word() {
        let (board, index) = setup();
        let outcome = play(&[(0, 0), (0, 1), (0, 2)], &board, &index);
        assert_eq!(outcome.verdict, MoveVerdict::Accepted);
        assert_eq!(outcome.session.word(), "app");
        assert_eq!(outcome.session.path().len(), 3);
        assert!(!outcome.session.is_completed());
    }

    #[test]
    fn completing_a_word_is_announced() {
        let (board, index) = setup();
        let outcome = play(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], &board, &index);
        assert_eq!(outcome.verdict, MoveVerdict::Completed("apple".to_string()));
        assert_eq!(outcome.session.word(), "apple");
        assert!(outcome.session.is_completed());
    }

    #[test]
    fn rejected_move_leaves_session_untouched() {
        let (board, index) = setup();
        let before = play(&[(0, 0), (0, 1)], &board, &index).session;
        let outcome = record_move(before.clone(), Coord::new(1, 1), &board, index.trie());
        assert_eq!(outcome.verdict, MoveVerdict::Rejected);
        assert_eq!(outcome.session, before);
    }

    #[test]
    fn non_adjacent_move_is_rejected() {
        let (board, index) = setup();
        let before = play(&[(0, 0)], &board, &index).session;
        let outcome = record_move(before.clone(), Coord::new(0, 2), &board, index.trie());
        assert_eq!(outcome.verdict, MoveVerdict::Rejected);
        assert_eq!(outcome.session, before);
    }

    #[test]
    fn off_board_move_is_rejected() {
        let (board, index) = setup();
        let outcome = record_move(PlaySession::new(), Coord::new(-1, 0), &board, index.trie());
        assert_eq!(outcome.verdict, MoveVerdict::Rejected);
        assert!(outcome.session.path().is_empty());
    }

    #[test]
    fn first_move_on_unknown_letter_is_rejected() {
        let (board, index) = setup();
        let outcome = record_move(PlaySession::new(), Coord::new(1, 1), &board, index.trie());
        assert_eq!(outcome.verdict, MoveVerdict::Rejected);
    }

    #[test]
    fn reselecting_a_cell_is_reported() {
        let (board, index) = setup();
        let before = play(&[(0, 0), (0, 1)], &board, &index).session;
        let outcome = record_move(before.clone(), Coord::new(0, 0), &board, index.trie());
        assert_eq!(outcome.verdict, MoveVerdict::AlreadySelected);
        assert_eq!(outcome.session, before);
    }

    #[test]
    fn moves_after_completion_are_rejected() {
        let (board, index) = setup();
        let done = play(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], &board, &index).session;
        let outcome = record_move(done.clone(), Coord::new(1, 4), &board, index.trie());
        assert_eq!(outcome.verdict, MoveVerdict::Rejected);
        assert_eq!(outcome.session, done);
    }

    #[test]
    fn downward_word_completes_too() {
        let (board, index) = setup();
        let outcome = play(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], &board, &index);
        assert_eq!(outcome.verdict, MoveVerdict::Completed("apple".to_string()));
    }

    #[test]
    fn reset_is_a_default_session() {
        let (board, index) = setup();
        let session = play(&[(0, 0), (0, 1)], &board, &index).session;
        assert_ne!(session, PlaySession::default());
        let reset = PlaySession::default();
        assert!(reset.path().is_empty());
        assert_eq!(reset.word(), "");
        assert!(!reset.is_completed());
    }
}
