//! The fixed four-symbol alphabet shared by genomes and query patterns.

use crate::error::OrfError;

/// Number of symbols in the alphabet, and child slots per trie node.
pub const ALPHABET_SIZE: usize = 4;

/// The permitted symbols, in slot order.
pub const ALPHABET: [u8; ALPHABET_SIZE] = [b'A', b'B', b'C', b'D'];

/// Map a symbol to its child-slot index.
///
/// Returns `None` for any byte outside the alphabet.
#[inline]
pub(crate) fn slot(symbol: u8) -> Option<usize> {
    let idx = symbol.wrapping_sub(b'A') as usize;
    (idx < ALPHABET_SIZE).then_some(idx)
}

/// Validate that every byte of `text` belongs to the alphabet.
pub(crate) fn validate(text: &[u8]) -> Result<(), OrfError> {
    match text.iter().position(|&symbol| slot(symbol).is_none()) {
        Some(position) => Err(OrfError::InvalidSymbol {
            symbol: text[position],
            position,
        }),
        None => Ok(()),
    }
}

/// Encode `text` as a sequence of child-slot indices.
pub(crate) fn encode(text: &[u8]) -> Result<Vec<u8>, OrfError> {
    text.iter()
        .enumerate()
        .map(|(position, &symbol)| {
            slot(symbol)
                .map(|idx| idx as u8)
                .ok_or(OrfError::InvalidSymbol { symbol, position })
        })
        .collect()
}
