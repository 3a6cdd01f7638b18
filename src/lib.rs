//! Suffix-trie index for open-reading-frame style substring searches.
//!
//! This crate indexes a fixed genome over the four-symbol alphabet
//! `A`/`B`/`C`/`D` so that, given a `(start, end)` pattern pair, it can
//! enumerate every contiguous substring that begins with `start` and ends
//! with `end` without the two pattern occurrences overlapping. The index is
//! built once ([`OrfFinder::new`], `O(N²)`) and queried many times
//! ([`OrfFinder::find`]).
//!
//! ```
//! use orf_finder::OrfFinder;
//!
//! let finder = OrfFinder::new("AABAAB")?;
//! assert_eq!(finder.find("AA", "B")?, vec!["AAB", "AAB", "AABAAB"]);
//! # Ok::<(), orf_finder::OrfError>(())
//! ```

pub mod alphabet;
pub mod error;
pub mod finder;
pub mod trie;

pub use alphabet::{ALPHABET, ALPHABET_SIZE};
pub use error::OrfError;
pub use finder::OrfFinder;
pub use trie::SuffixTrie;
