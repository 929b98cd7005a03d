//! Word-finding engine
//!
//! Path validation, move validation against the dictionary, exhaustive board
//! search, interactive play state and random board generation.

mod generator;
mod moves;
mod path;
pub mod session;
mod solver;

pub use generator::BoardGenerator;
pub use moves::{MoveResult, check_solution};
pub use path::{Path, check_path};
pub use session::{MoveOutcome, MoveVerdict, PlaySession, record_move};
pub use solver::{Found, SolveStats, Solver};
