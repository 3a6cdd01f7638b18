//! Suffix-indexing trie with fixed four-way branching.
//!
//! Every suffix of the genome is inserted along a path from the root; each
//! node on the path records the suffix's starting position. The node reached
//! by spelling a string `S` of length `L` therefore stores exactly the
//! positions `i` with `genome[i..i + L] == S`, in increasing order of `i`.

use log::debug;

use crate::alphabet::{self, slot, ALPHABET_SIZE};
use crate::error::OrfError;

/// A trie node: one exclusively-owned child slot per alphabet symbol, plus
/// the start positions of every suffix whose path passes through this node.
///
/// The `starts` list is append-only during construction and never touched
/// afterwards. The root's list stays empty (no symbol precedes the root).
#[derive(Debug, Default)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    starts: Vec<usize>,
}

/// Suffix trie over a validated genome. Built once, read-only afterwards.
#[derive(Debug)]
pub struct SuffixTrie {
    root: TrieNode,
    genome_len: usize,
}

impl SuffixTrie {
    /// Build the trie by inserting all `N` suffixes of `genome`.
    ///
    /// Inserting the suffix at `i` walks from the root one symbol at a time,
    /// creating absent children and appending `i` to every node reached, so
    /// construction costs `O(N²)` time and aggregate occurrence-list space.
    ///
    /// Fails with [`OrfError::InvalidSymbol`] before any insertion if the
    /// genome contains a byte outside the alphabet.
    pub fn build(genome: &[u8]) -> Result<Self, OrfError> {
        let codes = alphabet::encode(genome)?;
        let mut root = TrieNode::default();

        for start in 0..codes.len() {
            let mut node = &mut root;
            for &code in &codes[start..] {
                node = node.children[code as usize]
                    .get_or_insert_with(|| Box::new(TrieNode::default()));
                node.starts.push(start);
            }
        }

        debug!("suffix trie built from {} suffixes", codes.len());
        Ok(Self {
            root,
            genome_len: codes.len(),
        })
    }

    /// Start positions of every occurrence of `prefix` in the genome, in
    /// increasing order.
    ///
    /// Returns an empty slice when the prefix never occurs, and
    /// [`OrfError::InvalidSymbol`] when `prefix` strays outside the alphabet.
    /// Cost is `O(P)` in the prefix length.
    pub fn prefix_starts(&self, prefix: &[u8]) -> Result<&[usize], OrfError> {
        let mut node = &self.root;
        for (position, &symbol) in prefix.iter().enumerate() {
            let idx = slot(symbol).ok_or(OrfError::InvalidSymbol { symbol, position })?;
            match node.children[idx].as_deref() {
                Some(child) => node = child,
                None => return Ok(&[]),
            }
        }
        Ok(&node.starts)
    }

    /// Length of the genome the trie was built from.
    pub fn genome_len(&self) -> usize {
        self.genome_len
    }
}
