// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Levenshtein edit distance.
//!
//! Insertion, deletion and substitution each cost one. Comparison is exact
//! (case-sensitive) and transpositions count as two edits.

/// Maximum edit distance for a word to be offered as a spelling suggestion.
pub const SPELLING_DISTANCE: usize = 2;

/// Computes the edit distance between two unit sequences.
///
/// Uses two rolling rows, so memory is O(`b.len()`).
///
/// # Examples
///
/// ```
/// use lanai_lib::data_structures::lanai_trie::edit_distance;
///
/// let kitten: Vec<char> = "kitten".chars().collect();
/// let sitting: Vec<char> = "sitting".chars().collect();
/// assert_eq!(edit_distance(&kitten, &sitting), 3);
/// ```
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, unit) in a.iter().enumerate() {
        current[0] = i + 1;
        next_row(&previous, &mut current, unit, b);
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Edit distance over the Unicode scalar values of two strings.
pub fn str_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b)
}

/// Fills `row[1..]` for one more unit of the source word.
///
/// `row[0]` must already hold the distance from the source prefix to the
/// empty target.
pub(crate) fn next_row<T: PartialEq>(previous: &[usize], row: &mut [usize], unit: &T, target: &[T]) {
    for (j, expected) in target.iter().enumerate() {
        let substitution = previous[j] + usize::from(unit != expected);
        let insertion = row[j] + 1;
        let deletion = previous[j + 1] + 1;
        row[j + 1] = substitution.min(insertion).min(deletion);
    }
}
