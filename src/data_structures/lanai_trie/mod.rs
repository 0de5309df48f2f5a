// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie Implementation
//!
//! A prefix-tree dictionary with exact lookup, deletion with pruning,
//! prefix-based autosuggestion, full enumeration and edit-distance spelling
//! suggestions.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("cat").unwrap();
//! trie.insert("caterpillar").unwrap();
//!
//! assert!(trie.search("cat"));
//! assert!(!trie.search("ca"));
//! assert_eq!(trie.auto_suggest("cate"), vec!["caterpillar".to_string()]);
//! assert_eq!(trie.get_spelling_suggestions("caterpiller"), vec!["caterpillar".to_string()]);
//! ```
//!
//! # Concurrency
//!
//! The trie has no internal locking. Mutations take `&mut self`, so sharing a
//! trie between threads requires an external reader-writer lock around it.

mod config;
mod distance;
mod error;
mod node;
mod render;
mod word;

#[cfg(test)]
mod tests;

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace, warn};

pub use config::LanaiTrieConfig;
pub use distance::{edit_distance, str_distance, SPELLING_DISTANCE};
pub use error::{LanaiTrieError, LanaiTrieResult};
pub use word::Word;
use node::TrieNode;

/// Lanai Trie is a dictionary of words keyed by their character units.
///
/// Key features:
/// * Insertion-ordered children, so every enumeration is deterministic
/// * Deletion prunes every node that no longer leads to a word
/// * Spelling suggestions via a bounded edit-distance walk of the tree
/// * Generic over the unit type: `str` (chars) by default, or `[u8]` (bytes)
pub struct LanaiTrie<W: Word + ?Sized = str> {
    /// The root node, representing the empty prefix
    root: TrieNode<W::Unit>,

    /// Number of live words
    len: usize,

    /// Configuration options
    config: LanaiTrieConfig,

    _word: PhantomData<fn(&W)>,
}

impl<W: Word + ?Sized> LanaiTrie<W> {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            config,
            _word: PhantomData,
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the path are created. Inserting the empty word marks
    /// the root as terminal.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was not present and has been inserted.
    /// * `Ok(false)` - The word was already present; nothing changed.
    /// * `Err(LanaiTrieError::WordTooLong)` - A `max_word_length` is configured
    ///   and the word exceeds it. Without one, `insert` never fails.
    pub fn insert(&mut self, word: &W) -> LanaiTrieResult<bool> {
        let units = word.units();
        if let Some(max_length) = self.config.max_word_length {
            if units.len() > max_length {
                return Err(LanaiTrieError::WordTooLong {
                    length: units.len(),
                    max_length,
                });
            }
        }
        Ok(self.insert_units(&units))
    }

    fn insert_units(&mut self, units: &[W::Unit]) -> bool {
        let mut node = &mut self.root;
        let mut created = 0;
        for unit in units.iter().cloned() {
            let (child, is_new) = node.children.get_or_insert(unit);
            created += usize::from(is_new);
            node = child;
        }

        if node.is_terminal {
            trace!(length = units.len(), "Word already present");
            return false;
        }

        node.is_terminal = true;
        self.len += 1;
        debug!(length = units.len(), created, words = self.len, "Inserted word");
        true
    }

    /// Inserts every word from an iterator.
    ///
    /// Words rejected by a configured `max_word_length` are logged and
    /// skipped; the rest are still inserted.
    ///
    /// # Returns
    ///
    /// The number of words that were newly inserted.
    pub fn insert_all<'a, I>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = &'a W>,
        W: 'a,
    {
        let mut inserted = 0;
        for word in words {
            match self.insert(word) {
                Ok(is_new) => inserted += usize::from(is_new),
                Err(e) => warn!("Skipping word: {}", e),
            }
        }
        inserted
    }

    /// Checks whether a word is present in the trie.
    ///
    /// A prefix of a stored word is only found if it was inserted itself.
    pub fn search(&self, word: &W) -> bool {
        self.find_node(&word.units())
            .map(|node| node.is_terminal)
            .unwrap_or(false)
    }

    /// Checks whether any stored word starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &W) -> bool {
        self.find_node(&prefix.units()).is_some()
    }

    /// Removes a word from the trie.
    ///
    /// Nodes that no longer lead to any word are pruned. Pruning stops at the
    /// first ancestor that ends another word or still has other children.
    ///
    /// # Returns
    ///
    /// `true` if the word was present and has been removed, `false` otherwise.
    pub fn delete(&mut self, word: &W) -> bool {
        let units = word.units();
        let Some(keep) = self.kept_depth(&units) else {
            trace!(length = units.len(), "Word not present, nothing to delete");
            return false;
        };

        // The node at depth `keep` survives. Below it the path is a chain
        // that led only to this word, so it goes as one subtree.
        let pruned = units.len() - keep;
        match self.find_node_mut(&units[..keep]) {
            Some(node) if pruned == 0 => node.is_terminal = false,
            Some(node) => {
                node.children.remove(&units[keep]);
            }
            None => return false,
        }

        self.len -= 1;
        debug!(length = units.len(), pruned, words = self.len, "Deleted word");
        true
    }

    /// Returns the depth of the deepest node on the path of `units` that must
    /// outlive the word's deletion, or `None` if the word is not present.
    ///
    /// The root, nodes that end a word and nodes with several children are
    /// kept. The final node is kept if it still has children.
    fn kept_depth(&self, units: &[W::Unit]) -> Option<usize> {
        let mut keep = 0;
        let mut node = &self.root;
        for (depth, unit) in units.iter().enumerate() {
            if node.is_terminal || node.children.len() > 1 {
                keep = depth;
            }
            node = node.children.get(unit)?;
        }

        if !node.is_terminal {
            return None;
        }
        if !node.children.is_empty() {
            keep = units.len();
        }
        Some(keep)
    }

    /// Returns every stored word that starts with `prefix`.
    ///
    /// Words are listed in pre-order: a word comes before its extensions and
    /// siblings follow insertion order. The prefix itself is included if it is
    /// a stored word. An unknown prefix yields an empty vector.
    pub fn auto_suggest(&self, prefix: &W) -> Vec<W::Owned> {
        let mut path = prefix.units();
        let mut words = Vec::new();
        if let Some(node) = self.find_node(&path) {
            Self::visit_words(node, &mut path, |units| words.push(W::from_units(units)));
        }
        trace!(prefix_length = path.len(), matches = words.len(), "Collected suggestions");
        words
    }

    /// Returns every stored word in pre-order.
    pub fn get_all_words(&self) -> Vec<W::Owned> {
        let mut words = Vec::with_capacity(self.len);
        Self::visit_words(&self.root, &mut Vec::new(), |units| {
            words.push(W::from_units(units))
        });
        words
    }

    /// Calls `visit` with the unit path of every word at or below `start`, in
    /// pre-order. `path` holds the units leading to `start` and is restored
    /// before returning.
    fn visit_words<F>(start: &TrieNode<W::Unit>, path: &mut Vec<W::Unit>, mut visit: F)
    where
        F: FnMut(&[W::Unit]),
    {
        let base = path.len();
        if start.is_terminal {
            visit(path.as_slice());
        }

        // Each entry records the path length above the child it names.
        let mut pending: Vec<_> = start
            .children
            .iter()
            .rev()
            .map(|(unit, child)| (base, unit, child))
            .collect();
        while let Some((depth, unit, node)) = pending.pop() {
            path.truncate(depth);
            path.push(unit.clone());
            if node.is_terminal {
                visit(path.as_slice());
            }
            pending.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|(unit, child)| (depth + 1, unit, child)),
            );
        }
        path.truncate(base);
    }

    /// Returns every stored word within [`SPELLING_DISTANCE`] edits of `word`.
    ///
    /// Results follow the order of [`get_all_words`](Self::get_all_words).
    /// The tree is walked with one edit-distance row per node, and a branch is
    /// abandoned as soon as no entry of its row is within the threshold.
    pub fn get_spelling_suggestions(&self, word: &W) -> Vec<W::Owned> {
        let target = word.units();
        let width = target.len() + 1;

        let mut suggestions = Vec::new();
        if self.root.is_terminal && target.len() <= SPELLING_DISTANCE {
            suggestions.push(W::from_units(&[]));
        }

        // `rows[d]` is the distance row for the first `d` units of `path`.
        let mut rows: Vec<Vec<usize>> = vec![(0..width).collect()];
        let mut path = Vec::new();
        let mut pending: Vec<_> = self
            .root
            .children
            .iter()
            .rev()
            .map(|(unit, child)| (0, unit, child))
            .collect();
        while let Some((depth, unit, node)) = pending.pop() {
            path.truncate(depth);
            rows.truncate(depth + 1);

            let previous = &rows[depth];
            let mut row = vec![previous[0] + 1; width];
            distance::next_row(previous, &mut row, unit, &target);

            path.push(unit.clone());
            if node.is_terminal && row[target.len()] <= SPELLING_DISTANCE {
                suggestions.push(W::from_units(&path));
            }
            if row.iter().any(|&cost| cost <= SPELLING_DISTANCE) {
                pending.extend(
                    node.children
                        .iter()
                        .rev()
                        .map(|(unit, child)| (depth + 1, unit, child)),
                );
            }
            rows.push(row);
        }

        trace!(length = target.len(), matches = suggestions.len(), "Collected spelling suggestions");
        suggestions
    }

    /// Renders the tree as an indented outline.
    ///
    /// See the `render` module for the format.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Emits the rendered tree through `tracing` at debug level.
    pub fn dump(&self) {
        debug!(words = self.len, nodes = self.node_count(), "Trie structure:\n{}", self);
    }

    /// Returns the number of words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes, including the root.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Removes every word from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    fn find_node(&self, units: &[W::Unit]) -> Option<&TrieNode<W::Unit>> {
        units
            .iter()
            .try_fold(&self.root, |node, unit| node.children.get(unit))
    }

    fn find_node_mut(&mut self, units: &[W::Unit]) -> Option<&mut TrieNode<W::Unit>> {
        let mut node = &mut self.root;
        for unit in units {
            node = node.children.get_mut(unit)?;
        }
        Some(node)
    }
}

impl<W: Word + ?Sized> Default for LanaiTrie<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word + ?Sized> Clone for LanaiTrie<W> {
    /// Rebuilds the tree by re-inserting every word in pre-order, which
    /// recreates each node's children in the same order.
    fn clone(&self) -> Self {
        let mut trie = Self::with_config(self.config.clone());
        Self::visit_words(&self.root, &mut Vec::new(), |units| {
            trie.insert_units(units);
        });
        trie
    }
}

impl<W: Word + ?Sized> fmt::Debug for LanaiTrie<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanaiTrie")
            .field("len", &self.len)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<W: Word + ?Sized> fmt::Display for LanaiTrie<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_tree::<W, _>(f, &self.root)
    }
}
