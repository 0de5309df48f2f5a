// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Character unit abstraction for words stored in the Lanai Trie.
//!
//! A trie is keyed by the units of a borrowed word type. `str` words are
//! split into Unicode scalar values and `[u8]` words into raw bytes. No
//! normalization or case folding is applied.

use std::fmt::Debug;
use std::hash::Hash;

/// A borrowed word that can be split into character units and rebuilt.
pub trait Word {
    /// One edge label in the trie.
    type Unit: Eq + Hash + Clone + Debug;

    /// Owned form returned by enumeration and suggestion queries.
    type Owned: Clone + Debug + PartialEq;

    /// Splits the word into its units.
    fn units(&self) -> Vec<Self::Unit>;

    /// Rebuilds an owned word from a unit path.
    fn from_units(units: &[Self::Unit]) -> Self::Owned;

    /// Human-readable label for a unit, used when rendering the tree.
    fn label(unit: &Self::Unit) -> String;
}

impl Word for str {
    type Unit = char;
    type Owned = String;

    fn units(&self) -> Vec<char> {
        self.chars().collect()
    }

    fn from_units(units: &[char]) -> String {
        units.iter().collect()
    }

    fn label(unit: &char) -> String {
        unit.escape_debug().to_string()
    }
}

impl Word for [u8] {
    type Unit = u8;
    type Owned = Vec<u8>;

    fn units(&self) -> Vec<u8> {
        self.to_vec()
    }

    fn from_units(units: &[u8]) -> Vec<u8> {
        units.to_vec()
    }

    fn label(unit: &u8) -> String {
        unit.escape_ascii().to_string()
    }
}
