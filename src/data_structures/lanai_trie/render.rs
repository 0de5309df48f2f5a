//! Structural outline of a trie for human inspection.
//!
//! ```text
//! .
//! └── c
//!     └── a
//!         ├── t *
//!         └── r *
//! ```
//!
//! The root is drawn as `.` and terminal nodes are suffixed with ` *`.

use std::fmt::{self, Write};
use std::hash::Hash;

use super::node::TrieNode;
use super::word::Word;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Writes the outline of the tree rooted at `root`.
pub(crate) fn write_tree<W, F>(out: &mut F, root: &TrieNode<W::Unit>) -> fmt::Result
where
    W: Word + ?Sized,
    F: Write,
{
    out.write_char('.')?;
    if root.is_terminal {
        out.write_str(" *")?;
    }
    out.write_char('\n')?;

    // Entries carry the depth of the child and whether it is the last of
    // its siblings; `segments[d]` continues the connector of depth `d`.
    let mut segments: Vec<&str> = Vec::new();
    let mut pending = child_entries(root, 0);
    while let Some((depth, last, unit, node)) = pending.pop() {
        segments.truncate(depth);
        for segment in &segments {
            out.write_str(segment)?;
        }
        out.write_str(if last { LAST_BRANCH } else { BRANCH })?;
        out.write_str(&W::label(unit))?;
        if node.is_terminal {
            out.write_str(" *")?;
        }
        out.write_char('\n')?;

        segments.push(if last { SPACE } else { PIPE });
        pending.extend(child_entries(node, depth + 1));
    }
    Ok(())
}

/// Children of `node` in reverse, ready to be popped in order.
fn child_entries<K>(node: &TrieNode<K>, depth: usize) -> Vec<(usize, bool, &K, &TrieNode<K>)>
where
    K: Eq + Hash + Clone,
{
    let count = node.children.len();
    node.children
        .iter()
        .enumerate()
        .rev()
        .map(|(position, (unit, child))| (depth, position + 1 == count, unit, child))
        .collect()
}
