// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Trie.
//!
//! Each node exclusively owns its children. The edge label for a child is the
//! key of its entry in the parent's [`Children`] map; the root has no label.

use fnv::FnvHashMap;
use std::hash::Hash;

/// Insertion-ordered mapping from a character unit to an owned child node.
///
/// Entries are kept in a vector in the order they were first added, with an
/// FNV index from unit to slot so lookups stay O(1).
pub(crate) struct Children<K> {
    index: FnvHashMap<K, usize>,
    entries: Vec<(K, TrieNode<K>)>,
}

impl<K: Eq + Hash + Clone> Children<K> {
    pub(crate) fn new() -> Self {
        Self {
            index: FnvHashMap::default(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn get(&self, unit: &K) -> Option<&TrieNode<K>> {
        self.index.get(unit).map(|&slot| &self.entries[slot].1)
    }

    pub(crate) fn get_mut(&mut self, unit: &K) -> Option<&mut TrieNode<K>> {
        match self.index.get(unit) {
            Some(&slot) => Some(&mut self.entries[slot].1),
            None => None,
        }
    }

    /// Returns the child for `unit`, creating an empty one if needed.
    ///
    /// The flag is `true` when a node was created.
    pub(crate) fn get_or_insert(&mut self, unit: K) -> (&mut TrieNode<K>, bool) {
        let (slot, created) = match self.index.get(&unit) {
            Some(&slot) => (slot, false),
            None => {
                let slot = self.entries.len();
                self.index.insert(unit.clone(), slot);
                self.entries.push((unit, TrieNode::new()));
                (slot, true)
            }
        };
        (&mut self.entries[slot].1, created)
    }

    /// Removes the child for `unit`, keeping the remaining entries in order.
    pub(crate) fn remove(&mut self, unit: &K) -> Option<TrieNode<K>> {
        let slot = self.index.remove(unit)?;
        let (_, node) = self.entries.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
        Some(node)
    }

    pub(crate) fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = (&K, &TrieNode<K>)> + ExactSizeIterator {
        self.entries.iter().map(|(unit, node)| (unit, node))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K> Children<K> {
    /// Detaches every entry, leaving the map empty.
    fn take_entries(&mut self) -> Vec<(K, TrieNode<K>)> {
        self.index.clear();
        std::mem::take(&mut self.entries)
    }
}

/// A node in the Lanai Trie.
///
/// A node is terminal when the path from the root to it spells a live word.
/// Trees may be as deep as the longest word, so no operation on a node
/// recurses into its children.
pub(crate) struct TrieNode<K> {
    /// Child nodes in insertion order
    pub(crate) children: Children<K>,

    /// Whether this node represents the end of a word
    pub(crate) is_terminal: bool,
}

impl<K: Eq + Hash + Clone> TrieNode<K> {
    /// Creates a new non-terminal node with no children.
    pub(crate) fn new() -> Self {
        Self {
            children: Children::new(),
            is_terminal: false,
        }
    }

    /// Counts this node and every descendant.
    pub(crate) fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter().map(|(_, child)| child));
        }
        count
    }
}

impl<K> Drop for TrieNode<K> {
    fn drop(&mut self) {
        // Unlink descendants one level at a time; each popped node drops
        // with no children left.
        let mut pending = self.children.take_entries();
        while let Some((_, mut node)) = pending.pop() {
            pending.append(&mut node.children.take_entries());
        }
    }
}

impl<K: Eq + Hash + Clone> Default for TrieNode<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(children: &Children<char>) -> Vec<char> {
        children.iter().map(|(unit, _)| *unit).collect()
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut children = Children::new();
        for unit in ['t', 'a', 'm'] {
            let (_, created) = children.get_or_insert(unit);
            assert!(created);
        }

        let (_, created) = children.get_or_insert('a');
        assert!(!created);
        assert_eq!(labels(&children), vec!['t', 'a', 'm']);
        assert_eq!(children.len(), 3);
    }

    #[test]
    fn test_children_remove_reindexes() {
        let mut children = Children::new();
        for unit in ['x', 'y', 'z'] {
            children.get_or_insert(unit).0.is_terminal = unit == 'z';
        }

        assert!(children.remove(&'x').is_some());
        assert!(children.remove(&'x').is_none());
        assert_eq!(labels(&children), vec!['y', 'z']);

        // The index must still point at the right slots after the shift
        assert!(children.get(&'z').map(|n| n.is_terminal).unwrap_or(false));
        assert!(!children.get(&'y').map(|n| n.is_terminal).unwrap_or(true));
        children.get_mut(&'y').unwrap().is_terminal = true;
        assert!(children.get(&'y').unwrap().is_terminal);
    }

    #[test]
    fn test_subtree_size() {
        let mut node: TrieNode<char> = TrieNode::new();
        assert_eq!(node.subtree_size(), 1);

        node.children.get_or_insert('q').0.children.get_or_insert('u');
        node.children.get_or_insert('r');
        assert_eq!(node.subtree_size(), 4);
    }

    #[test]
    fn test_deep_chain_drops() {
        let mut root: TrieNode<u16> = TrieNode::new();
        let mut node = &mut root;
        for unit in 0..50_000u16 {
            node = node.children.get_or_insert(unit).0;
        }
        node.is_terminal = true;

        assert_eq!(root.subtree_size(), 50_001);
        drop(root);
    }
}
