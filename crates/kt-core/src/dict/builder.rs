//! Offline encoder producing the packed dictionary image.
//!
//! Builds the two tries in memory, then serializes them in the layout the
//! navigators read back: unigram header, depth-first unigram nodes with
//! parent back-pointers, n-gram header, depth-first n-gram nodes whose
//! word references point at unigram leaves.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::bytes::write_u24;

use super::image::UNIGRAM_HEADER_LEN;
use super::DictError;

const MAX_OFFSET: usize = (1 << 24) - 1;

#[derive(Default)]
struct CharNode {
    weight: u8,
    children: BTreeMap<u8, CharNode>,
}

#[derive(Default)]
struct WordNode {
    weight: u8,
    children: BTreeMap<String, WordNode>,
}

/// Accumulates weighted words and phrases, then encodes the byte image.
///
/// Child order is deterministic (byte order for characters, lexicographic
/// for phrase words), so identical inputs produce identical images.
#[derive(Default)]
pub struct DictBuilder {
    unigrams: CharNode,
    ngrams: WordNode,
}

impl DictBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `word` with `weight`. Re-adding a word overwrites its
    /// weight.
    pub fn add_unigram(&mut self, word: &str, weight: u8) -> Result<(), DictError> {
        if word.is_empty() {
            return Err(DictError::Encode("empty word".into()));
        }
        if weight == 0 {
            return Err(DictError::Encode(format!("word {word:?} has zero weight")));
        }
        let mut node = &mut self.unigrams;
        for &b in word.as_bytes() {
            if b == 0 {
                return Err(DictError::Encode(format!(
                    "word {word:?} contains a NUL byte"
                )));
            }
            node = node.children.entry(b).or_default();
        }
        node.weight = weight;
        Ok(())
    }

    /// Register the phrase `words` with `weight`. Every component word
    /// must also be registered as a unigram before [`build`](Self::build).
    pub fn add_ngram(&mut self, words: &[&str], weight: u8) -> Result<(), DictError> {
        if words.is_empty() {
            return Err(DictError::Encode("empty phrase".into()));
        }
        if weight == 0 {
            return Err(DictError::Encode(format!(
                "phrase {words:?} has zero weight"
            )));
        }
        let mut node = &mut self.ngrams;
        for &word in words {
            if word.is_empty() {
                return Err(DictError::Encode(format!(
                    "phrase {words:?} contains an empty word"
                )));
            }
            node = node.children.entry(word.to_string()).or_default();
        }
        node.weight = weight;
        Ok(())
    }

    /// Serialize both tries into a fresh image.
    pub fn build(&self) -> Result<Vec<u8>, DictError> {
        let mut out = vec![0u8; UNIGRAM_HEADER_LEN];
        write_u24(&mut out, 0, self.unigrams.children.len() as u32);
        // bytes 3..6 hold the n-gram header offset, patched below

        let mut leaves = HashMap::new();
        let mut prefix = Vec::new();
        encode_char_node(&self.unigrams, 0, 0, &mut out, &mut prefix, &mut leaves)?;

        let ngrams_offset = checked_offset(out.len())?;
        write_u24(&mut out, 3, ngrams_offset);
        out.resize(out.len() + 3, 0);
        write_u24(
            &mut out,
            ngrams_offset as usize,
            self.ngrams.children.len() as u32,
        );
        encode_word_node(&self.ngrams, None, &mut out, &leaves)?;

        Ok(out)
    }

    /// Encode the image and write it to `path`.
    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        Ok(fs::write(path, self.build()?)?)
    }
}

fn checked_offset(pos: usize) -> Result<u32, DictError> {
    if pos > MAX_OFFSET {
        return Err(DictError::Encode(
            "image exceeds 24-bit addressing".into(),
        ));
    }
    Ok(pos as u32)
}

fn checked_child_count(count: usize) -> Result<u8, DictError> {
    count
        .try_into()
        .map_err(|_| DictError::Encode(format!("node has {count} children (max 255)")))
}

/// Append one unigram node (and, recursively, its subtree); returns the
/// node's offset. Terminal offsets are recorded in `leaves` for the n-gram
/// pass.
fn encode_char_node(
    node: &CharNode,
    value: u8,
    parent: u32,
    out: &mut Vec<u8>,
    prefix: &mut Vec<u8>,
    leaves: &mut HashMap<Vec<u8>, u32>,
) -> Result<u32, DictError> {
    let child_count = checked_child_count(node.children.len())?;
    let offset = checked_offset(out.len())?;
    out.push(value);
    out.push(node.weight);
    out.push(child_count);
    out.extend_from_slice(&parent.to_be_bytes()[1..]);
    let slots = out.len();
    out.resize(slots + 3 * child_count as usize, 0);

    if node.weight > 0 {
        leaves.insert(prefix.clone(), offset);
    }
    for (i, (&b, child)) in node.children.iter().enumerate() {
        prefix.push(b);
        let child_offset = encode_char_node(child, b, offset, out, prefix, leaves)?;
        prefix.pop();
        write_u24(out, slots + 3 * i, child_offset);
    }
    Ok(offset)
}

/// Append one n-gram node (and, recursively, its subtree); returns the
/// node's offset. `word` is `None` only for the dummy root, whose word
/// reference is 0.
fn encode_word_node(
    node: &WordNode,
    word: Option<&str>,
    out: &mut Vec<u8>,
    leaves: &HashMap<Vec<u8>, u32>,
) -> Result<u32, DictError> {
    let child_count = checked_child_count(node.children.len())?;
    let offset = checked_offset(out.len())?;
    let word_ref = match word {
        None => 0,
        Some(w) => *leaves.get(w.as_bytes()).ok_or_else(|| {
            DictError::Encode(format!("phrase word {w:?} is not a stored unigram"))
        })?,
    };
    out.extend_from_slice(&word_ref.to_be_bytes()[1..]);
    out.push(node.weight);
    out.push(child_count);
    let slots = out.len();
    out.resize(slots + 3 * child_count as usize, 0);

    for (i, (w, child)) in node.children.iter().enumerate() {
        let child_offset = encode_word_node(child, Some(w), out, leaves)?;
        write_u24(out, slots + 3 * i, child_offset);
    }
    Ok(offset)
}
