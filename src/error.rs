//! Errors surfaced by index construction and queries.

/// Errors returned by `OrfFinder` and `SuffixTrie` operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrfError {
    /// A byte outside the permitted alphabet was found in a genome or query
    /// pattern. Checked at the boundary before any traversal happens.
    #[error("symbol '{}' at position {} is outside the A-D alphabet", char::from(*symbol), position)]
    InvalidSymbol { symbol: u8, position: usize },

    /// A query pattern was empty. Both the start and end patterns must
    /// contain at least one symbol.
    #[error("query patterns must be non-empty")]
    EmptyPattern,
}
