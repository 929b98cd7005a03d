//! Dictionary analysis command
//!
//! Summarizes the loaded dictionary: size, trie shape and letter frequencies.

use crate::core::{Letter, WORD_LEN};
use crate::dictionary::{DictionaryIndex, TrieNode};

/// Result of dictionary analysis
pub struct AnalysisResult {
    pub word_count: usize,
    pub node_count: usize,
    pub total_letters: usize,
    /// Distinct prefixes at each depth 1..=5
    pub prefixes_per_depth: [usize; WORD_LEN],
    /// Observed letters, most frequent first
    pub frequencies: Vec<(Letter, f64)>,
}

/// Analyze the trie and frequency table of a dictionary
#[must_use]
pub fn analyze_dictionary(index: &DictionaryIndex) -> AnalysisResult {
    let trie = index.trie();
    let mut prefixes_per_depth = [0; WORD_LEN];
    count_depths(trie.root(), 0, &mut prefixes_per_depth);

    AnalysisResult {
        word_count: trie.len(),
        node_count: trie.node_count(),
        total_letters: index.frequencies().total_letters(),
        prefixes_per_depth,
        frequencies: index.frequencies().most_common(usize::MAX),
    }
}

fn count_depths(node: &TrieNode, depth: usize, counts: &mut [usize; WORD_LEN]) {
    for (_, child) in node.children() {
        if let Some(slot) = counts.get_mut(depth) {
            *slot += 1;
        }
        count_depths(child, depth + 1, counts);
    }
}
