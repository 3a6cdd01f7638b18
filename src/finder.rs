//! Combined prefix/suffix substring queries over a suffix-trie index.

use log::{debug, trace};

use crate::alphabet;
use crate::error::OrfError;
use crate::trie::SuffixTrie;

/// Index over a single genome answering "every substring that begins with
/// `start` and ends with `end`" queries.
///
/// The genome and the trie are fixed at construction; queries are read-only,
/// so a built finder can be shared across threads freely.
#[derive(Debug)]
pub struct OrfFinder {
    genome: String,
    trie: SuffixTrie,
}

impl OrfFinder {
    /// Validate `genome` against the alphabet and eagerly build the suffix
    /// trie over it. `O(N²)` time and space in the genome length.
    pub fn new(genome: impl Into<String>) -> Result<Self, OrfError> {
        let genome = genome.into();
        let trie = SuffixTrie::build(genome.as_bytes())?;
        Ok(Self { genome, trie })
    }

    /// The indexed genome.
    pub fn genome(&self) -> &str {
        &self.genome
    }

    /// The underlying suffix trie.
    pub fn trie(&self) -> &SuffixTrie {
        &self.trie
    }

    /// All substrings of the genome that begin with `start` and end with
    /// `end`, where the two pattern occurrences do not overlap, sorted
    /// lexicographically ascending.
    ///
    /// Every distinct (start position, end position) pair yields its own
    /// entry, so identical texts arising from different spans are all kept.
    /// Occurrences of `end` that would overlap the `start` occurrence are
    /// skipped, not truncated.
    ///
    /// Fails with [`OrfError::EmptyPattern`] when either pattern is empty and
    /// [`OrfError::InvalidSymbol`] when either strays outside the alphabet.
    pub fn find(&self, start: &str, end: &str) -> Result<Vec<String>, OrfError> {
        if start.is_empty() || end.is_empty() {
            return Err(OrfError::EmptyPattern);
        }
        alphabet::validate(start.as_bytes())?;
        alphabet::validate(end.as_bytes())?;

        let candidates = self.trie.prefix_starts(start.as_bytes())?;
        debug!(
            "query start={start:?} end={end:?}: {} candidate starts",
            candidates.len()
        );

        let mut results = Vec::new();
        for &s in candidates {
            // First position where the end pattern fits without overlapping
            // the start occurrence at [s, s + start.len()).
            let search_from = s + start.len();
            let mut scan = search_from;
            while let Some(offset) = self.genome.get(scan..).and_then(|tail| tail.find(end)) {
                let e = scan + offset;
                trace!("match: start at {s}, end at {e}");
                results.push(self.genome[s..e + end.len()].to_string());
                scan = e + 1;
            }
        }

        results.sort_unstable();
        debug!("query produced {} substrings", results.len());
        Ok(results)
    }
}
