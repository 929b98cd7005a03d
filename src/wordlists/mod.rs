//! Word lists for the dictionary
//!
//! Provides the embedded default list compiled into the binary, and a loader
//! for newline-delimited word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
