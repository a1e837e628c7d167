//! Read-only binary dictionary engine for on-device text input.
//!
//! A dictionary is a packed byte image holding two coupled tries: a
//! character-level unigram trie of weighted words, and a word-level n-gram
//! trie whose leaves reference unigram leaves. [`dict::BinaryDictionary`]
//! answers membership, next-word prediction, and single-edit spelling
//! correction queries over that image; [`dict::DictBuilder`] encodes the
//! image offline.

pub(crate) mod bytes;
pub mod corrector;
pub mod dict;
