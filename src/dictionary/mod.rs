//! Dictionary index
//!
//! The prefix tree used for move validation and pruning, plus the letter
//! frequency table used to bias board generation.

mod frequency;
mod index;
mod trie;

pub use frequency::FrequencyTable;
pub use index::{DataError, DictionaryIndex};
pub use trie::{Trie, TrieNode};
