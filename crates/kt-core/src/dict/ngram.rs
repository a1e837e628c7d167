//! N-gram (word-level) trie traversal.
//!
//! Node layout at offset N:
//!
//! ```text
//! N+0..N+3  unigram leaf offset of this node's word
//! N+3       weight (> 0 marks a stored phrase)
//! N+4       child count
//! N+5+3i    i-th child offset
//! ```
//!
//! The first node sits 3 bytes past the n-gram header.

use super::image::DictImage;

const WORD_REF: u32 = 0;
const WEIGHT: u32 = 3;
const CHILD_COUNT: u32 = 4;
const CHILDREN: u32 = 5;

impl DictImage {
    /// Walk the n-gram trie matching `leaves` (unigram leaf offsets) in
    /// order, returning the node ending the chain.
    pub(super) fn find_ngram(&self, leaves: &[u32]) -> Option<u32> {
        if leaves.is_empty() {
            return None;
        }
        let mut node = self.ngrams_offset() + 3;
        for &head in leaves {
            node = self.ngram_child_by_leaf(node, head)?;
        }
        Some(node)
    }

    /// The child of `node` whose word reference equals `head`. The full
    /// 3-byte reference participates in the comparison.
    fn ngram_child_by_leaf(&self, node: u32, head: u32) -> Option<u32> {
        let count = self.u8_at(node + CHILD_COUNT) as u32;
        (0..count)
            .map(|i| self.u24_at(node + CHILDREN + 3 * i))
            .find(|&child| self.u24_at(child + WORD_REF) == head)
    }

    fn ngram_weight(&self, node: u32) -> u8 {
        self.u8_at(node + WEIGHT)
    }

    /// Up to `limit` children of `node` as (offset, weight) pairs, heaviest
    /// first; equal weights keep storage order.
    pub(super) fn ngram_children(&self, node: u32, limit: usize) -> Vec<(u32, u8)> {
        let count = self.u8_at(node + CHILD_COUNT) as u32;
        let mut children: Vec<(u32, u8)> = (0..count)
            .map(|i| {
                let child = self.u24_at(node + CHILDREN + 3 * i);
                (child, self.ngram_weight(child))
            })
            .collect();
        children.sort_by(|a, b| b.1.cmp(&a.1));
        children.truncate(limit);
        children
    }

    /// The unigram leaf this n-gram node refers to.
    pub(super) fn ngram_unigram(&self, node: u32) -> u32 {
        self.u24_at(node + WORD_REF)
    }
}
