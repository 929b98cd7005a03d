//! Word list loading utilities
//!
//! The dictionary builder is strict about word shape. This module is the
//! boundary that reads raw word sources and drops malformed lines before they
//! reach it.

use super::WORDS;
use crate::core::Word;
use crate::dictionary::{DataError, DictionaryIndex};
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Keep the well-formed words from newline-delimited text
///
/// Lines are trimmed; blank lines and `#` comments are ignored silently,
/// anything else that is not a 5-letter word is skipped with a warning.
///
/// # Examples
/// ```
/// use boggle_solver::wordlists::loader::filter_words;
///
/// let words = filter_words("apple\n\n  Stone \nnope\n# comment\n");
/// assert_eq!(words, vec!["apple", "stone"]);
/// ```
#[must_use]
pub fn filter_words(content: &str) -> Vec<String> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word.into_text()),
                Err(e) => {
                    warn!("skipping line {}: '{trimmed}' ({e})", line_no + 1);
                    None
                }
            }
        })
        .collect()
}

/// Read the well-formed words from a file
///
/// # Errors
///
/// Returns `DataError::Io` if the file cannot be opened or read.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DataError> {
    let content = fs::read_to_string(path)?;
    Ok(filter_words(&content))
}

/// Build the dictionary from a word file
///
/// # Errors
///
/// Returns `DataError::Io` if the file cannot be read and `DataError::Empty`
/// if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use boggle_solver::wordlists::loader::load_dictionary;
///
/// let index = load_dictionary("data/words.txt").unwrap();
/// println!("Loaded {} words", index.trie().len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<DictionaryIndex, DataError> {
    let path = path.as_ref();
    let words = read_words(path)?;
    info!("read {} words from {}", words.len(), path.display());
    DictionaryIndex::build(words)
}

/// Build the dictionary from the embedded word list
///
/// # Errors
///
/// Only fails if the embedded list is empty, which the build script never
/// produces from the shipped data.
pub fn embedded_dictionary() -> Result<DictionaryIndex, DataError> {
    DictionaryIndex::build(WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "boggle_solver_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn filter_keeps_valid_words() {
        let words = filter_words("crane\nslate\nirate\n");
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn filter_skips_malformed_lines() {
        let words = filter_words("crane\ntoolong\nabc\nsl4te\nslate\n");
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn filter_handles_crlf_and_case() {
        let words = filter_words("CRANE\r\nSlate\r\n");
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn filter_empty_input() {
        assert!(filter_words("").is_empty());
        assert!(filter_words("\n\n# only comments\n").is_empty());
    }

    #[test]
    fn load_from_file_builds_dictionary() {
        let path = temp_file("valid", "apple\nstone\nbad\n");
        let index = load_dictionary(&path).unwrap();
        assert_eq!(index.trie().len(), 2);
        assert!(index.trie().contains("stone"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn file_without_usable_words_is_empty_error() {
        let path = temp_file("empty", "toolong\nabc\n");
        assert!(matches!(load_dictionary(&path), Err(DataError::Empty)));
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_dictionary("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[test]
    fn embedded_dictionary_loads_all_words() {
        let index = embedded_dictionary().unwrap();
        assert_eq!(index.trie().len(), WORDS.len());
        let sum: f64 = index.frequencies().weights().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
