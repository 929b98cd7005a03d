//! Prefix tree over dictionary words
//!
//! Each edge is labelled by a letter and each node stands for the prefix spelled
//! from the root. A node is terminal iff it stores a complete word. Since every
//! word has exactly `WORD_LEN` letters, terminal nodes sit at that depth and
//! have no children.

use crate::core::{Letter, Word};
use rustc_hash::FxHashMap;

/// A single prefix in the trie
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: FxHashMap<Letter, TrieNode>,
    word: Option<String>,
}

impl TrieNode {
    /// Follow the edge labelled `letter`
    #[inline]
    #[must_use]
    pub fn child(&self, letter: Letter) -> Option<&Self> {
        self.children.get(&letter)
    }

    /// The complete word stored here, if this node is terminal
    #[inline]
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// Outgoing edges sorted by letter
    #[must_use]
    pub fn children(&self) -> Vec<(Letter, &Self)> {
        let mut children: Vec<(Letter, &Self)> =
            self.children.iter().map(|(&letter, node)| (letter, node)).collect();
        children.sort_unstable_by_key(|&(letter, _)| letter);
        children
    }

    #[inline]
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    fn count_nodes(&self) -> usize {
        1 + self.children.values().map(Self::count_nodes).sum::<usize>()
    }
}

/// Dictionary prefix tree
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating intermediate nodes as needed
    ///
    /// Returns `true` if the word was not already present.
    pub fn insert(&mut self, word: &Word) -> bool {
        let node = word
            .letters()
            .iter()
            .fold(&mut self.root, |node, &letter| {
                node.children.entry(letter).or_default()
            });

        if node.word.is_some() {
            return false;
        }
        node.word = Some(word.text().to_string());
        self.len += 1;
        true
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Walk the trie along `letters`, returning the node reached
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Letter, Word};
    /// use boggle_solver::dictionary::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert(&Word::new("apple").unwrap());
    ///
    /// let prefix: Vec<Letter> = "app".chars().filter_map(Letter::from_char).collect();
    /// assert!(trie.node(&prefix).is_some_and(|node| !node.is_terminal()));
    /// ```
    #[must_use]
    pub fn node(&self, letters: &[Letter]) -> Option<&TrieNode> {
        letters
            .iter()
            .try_fold(&self.root, |node, &letter| node.child(letter))
    }

    /// True iff `text` is a stored word
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        let Ok(word) = Word::new(text) else {
            return false;
        };
        self.node(word.letters())
            .is_some_and(TrieNode::is_terminal)
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes including the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LEN;

    fn letters(text: &str) -> Vec<Letter> {
        text.chars().filter_map(Letter::from_char).collect()
    }

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for &w in words {
            trie.insert(&Word::new(w).unwrap());
        }
        trie
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.contains("apple"));
    }

    #[test]
    fn insert_then_lookup_round_trip() {
        let trie = trie_of(&["apple"]);
        let node = trie.node(&letters("apple")).unwrap();
        assert_eq!(node.word(), Some("apple"));
        assert!(trie.contains("apple"));
        assert!(trie.contains("APPLE"));
    }

    #[test]
    fn prefixes_are_not_terminal() {
        let trie = trie_of(&["apple"]);
        for depth in 1..WORD_LEN {
            let node = trie.node(&letters(&"apple"[..depth])).unwrap();
            assert!(!node.is_terminal(), "prefix of length {depth} is terminal");
        }
    }

    #[test]
    fn terminal_nodes_have_no_children() {
        let trie = trie_of(&["apple", "apply", "stone"]);
        let node = trie.node(&letters("apple")).unwrap();
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn missing_edge_returns_none() {
        let trie = trie_of(&["apple"]);
        assert!(trie.node(&letters("appz")).is_none());
        assert!(trie.node(&letters("b")).is_none());
        assert!(!trie.contains("apply"));
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut trie = Trie::new();
        let word = Word::new("stone").unwrap();
        assert!(trie.insert(&word));
        assert!(!trie.insert(&word));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie = trie_of(&["apple", "apply"]);
        // root + a-p-p-l + e + y
        assert_eq!(trie.node_count(), 7);
        assert_eq!(trie.len(), 2);

        let fork = trie.node(&letters("appl")).unwrap();
        let edges: Vec<char> = fork.children().iter().map(|(l, _)| l.to_char()).collect();
        assert_eq!(edges, vec!['e', 'y']);
    }

    #[test]
    fn empty_walk_is_root() {
        let trie = trie_of(&["apple"]);
        let root = trie.node(&[]).unwrap();
        assert_eq!(root.child_count(), 1);
        assert!(!root.is_terminal());
    }
}
