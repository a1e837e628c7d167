//! Unigram (character-level) trie traversal.
//!
//! Node layout at offset U:
//!
//! ```text
//! U+0       character
//! U+1       weight (> 0 marks a stored word)
//! U+2       child count
//! U+3..U+6  parent offset
//! U+6+3i    i-th child offset
//! ```

use super::image::{DictImage, ROOT_UNIGRAM};
use super::MAX_WORD_LEN;

const CHAR: u32 = 0;
const WEIGHT: u32 = 1;
const CHILD_COUNT: u32 = 2;
const PARENT: u32 = 3;
const CHILDREN: u32 = 6;

/// Fixed part of a node before the child slots.
const NODE_LEN: u32 = 6;

impl DictImage {
    /// Walk the character trie from the root along the bytes of `word`,
    /// returning the offset of the node reached. The node is a stored word
    /// only if its weight is positive; callers check that themselves.
    pub(super) fn find_unigram(&self, word: &str) -> Option<u32> {
        if word.is_empty() || (self.len() as u32) < ROOT_UNIGRAM + NODE_LEN {
            return None;
        }
        let mut node = ROOT_UNIGRAM;
        for &head in word.as_bytes() {
            node = self.unigram_child_by_char(node, head)?;
        }
        Some(node)
    }

    fn unigram_child_by_char(&self, node: u32, head: u8) -> Option<u32> {
        let count = self.u8_at(node + CHILD_COUNT) as u32;
        (0..count)
            .map(|i| self.u24_at(node + CHILDREN + 3 * i))
            .find(|&child| self.u8_at(child + CHAR) == head)
    }

    pub(super) fn unigram_weight(&self, node: u32) -> u8 {
        self.u8_at(node + WEIGHT)
    }

    /// Up to `limit` children of `node` as (offset, weight) pairs, heaviest
    /// first; equal weights keep storage order.
    ///
    /// Prefix completion is the eventual consumer; only tests read this
    /// today.
    #[allow(dead_code)]
    pub(super) fn unigram_children(&self, node: u32, limit: usize) -> Vec<(u32, u8)> {
        let count = self.u8_at(node + CHILD_COUNT) as u32;
        let mut children: Vec<(u32, u8)> = (0..count)
            .map(|i| {
                let child = self.u24_at(node + CHILDREN + 3 * i);
                (child, self.unigram_weight(child))
            })
            .collect();
        children.sort_by(|a, b| b.1.cmp(&a.1));
        children.truncate(limit);
        children
    }

    fn unigram_parent(&self, node: u32) -> u32 {
        self.u24_at(node + PARENT)
    }

    /// Rebuild the word ending at `leaf` by following parent offsets up to
    /// the root, then reversing into root-to-leaf order. Zero character
    /// bytes (the dummy root slot) never contribute; the chain is cut at
    /// [`MAX_WORD_LEN`] steps.
    pub(super) fn unigram_word(&self, leaf: u32) -> String {
        let mut chars = Vec::new();
        let mut node = leaf;
        let mut steps = 0;
        while node > ROOT_UNIGRAM && steps < MAX_WORD_LEN {
            let c = self.u8_at(node + CHAR);
            if c != 0 {
                chars.push(c);
            }
            node = self.unigram_parent(node);
            steps += 1;
        }
        chars.reverse();
        String::from_utf8_lossy(&chars).into_owned()
    }
}
