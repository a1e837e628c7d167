//! Binary dictionary storage and queries.
//!
//! [`BinaryDictionary`] answers membership, next-word prediction, and
//! spelling-correction queries over a packed two-trie byte image.
//! [`DictBuilder`] encodes that image from weighted word and phrase lists.

mod binary_dict;
mod builder;
mod image;
mod ngram;
#[cfg(test)]
mod tests;
mod unigram;

pub use binary_dict::BinaryDictionary;
pub use builder::DictBuilder;

use std::io;

/// Longest word the ancestor walk will reconstruct; deeper parent chains
/// only occur in corrupt images and are cut off.
pub const MAX_WORD_LEN: usize = 48;

/// Error type for loading and encoding dictionary images.
///
/// Queries never return errors; a word or context with no match is an
/// empty result, not a failure.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("image truncated (shorter than the unigram header)")]
    Truncated,

    #[error("encode error: {0}")]
    Encode(String),
}

/// A dictionary word paired with its stored weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedWord {
    pub word: String,
    pub weight: u8,
}
