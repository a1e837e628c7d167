use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use tracing::{debug, debug_span};

use crate::corrector::Corrector;

use super::image::DictImage;
use super::{DictError, WeightedWord};

/// Read-only dictionary over a packed two-trie byte image.
///
/// Construction loads (or maps) the image once; queries never mutate it.
/// The two lookup caches sit behind `RwLock`s so every query takes `&self`
/// and one instance can be shared across threads. Scaling out further is
/// cheap: several instances may map the same image file, each with its own
/// caches.
pub struct BinaryDictionary {
    image: DictImage,
    corrector: Corrector,
    unigram_cache: RwLock<HashMap<String, u32>>,
    ngram_cache: RwLock<HashMap<Vec<u32>, u32>>,
}

impl BinaryDictionary {
    /// Map a dictionary image from a file.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let image = DictImage::open(path)?;
        debug!(len = image.len(), "dictionary image mapped");
        Ok(Self::with_image(image))
    }

    /// Take an already-loaded image.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, DictError> {
        Ok(Self::with_image(DictImage::from_bytes(bytes)?))
    }

    /// A dictionary with no image behind it: [`is_loaded`](Self::is_loaded)
    /// is false and every query answers empty. Stands in when the real
    /// image cannot be opened.
    pub fn empty() -> Self {
        Self::with_image(DictImage::unloaded())
    }

    fn with_image(image: DictImage) -> Self {
        Self {
            image,
            corrector: Corrector::new(),
            unigram_cache: RwLock::new(HashMap::new()),
            ngram_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the default `a`–`z` corrector, e.g. for another alphabet.
    pub fn with_corrector(mut self, corrector: Corrector) -> Self {
        self.corrector = corrector;
        self
    }

    /// Whether an image is behind this dictionary.
    pub fn is_loaded(&self) -> bool {
        !self.image.is_empty()
    }

    /// Returns (unigram root children, n-gram root children, image bytes).
    pub fn stats(&self) -> (u32, u32, usize) {
        if !self.is_loaded() {
            return (0, 0, 0);
        }
        let ngram_roots = self.image.u24_at(self.image.ngrams_offset());
        (
            self.image.unigram_root_count(),
            ngram_roots,
            self.image.len(),
        )
    }

    /// True iff `word` is stored with positive weight.
    pub fn exists(&self, word: &str) -> bool {
        self.weighted_word(word).is_some()
    }

    /// Resolve `word` to its stored weight; `None` when the word is absent
    /// or only a prefix of stored words.
    pub fn weighted_word(&self, word: &str) -> Option<WeightedWord> {
        let node = self.find_unigram(word)?;
        match self.image.unigram_weight(node) {
            0 => None,
            weight => Some(WeightedWord {
                word: word.to_string(),
                weight,
            }),
        }
    }

    /// Weighted next-word predictions for an ordered context, heaviest
    /// first (ties lexicographic), at most `max_predictions` entries.
    ///
    /// A context word missing from the unigram trie cannot head any stored
    /// chain, so the result is empty.
    pub fn predictions(&self, context: &[&str], max_predictions: usize) -> Vec<WeightedWord> {
        let _span =
            debug_span!("predictions", context_len = context.len(), max_predictions).entered();
        if max_predictions == 0 || !self.is_loaded() {
            return Vec::new();
        }

        let mut leaves = Vec::with_capacity(context.len());
        for &word in context {
            match self.find_unigram(word) {
                Some(leaf) => leaves.push(leaf),
                None => {
                    debug!(word, "context word not in dictionary");
                    return Vec::new();
                }
            }
        }
        let Some(ngram) = self.find_ngram(&leaves) else {
            return Vec::new();
        };

        let mut predictions: Vec<WeightedWord> = self
            .image
            .ngram_children(ngram, max_predictions)
            .into_iter()
            .filter(|&(_, weight)| weight > 0)
            .map(|(child, weight)| WeightedWord {
                word: self.image.unigram_word(self.image.ngram_unigram(child)),
                weight,
            })
            .collect();
        predictions.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.word.cmp(&b.word)));

        debug!(count = predictions.len());
        predictions
    }

    /// Spelling corrections within one edit of `word`, at most
    /// `max_corrections` entries.
    ///
    /// A word that is itself stored short-circuits to a single result.
    /// Otherwise the edit-distance-1 variations are filtered through the
    /// dictionary in generation order; a stored word reached by several
    /// different edits appears once per edit.
    pub fn corrections(&self, word: &str, max_corrections: usize) -> Vec<WeightedWord> {
        let _span = debug_span!("corrections", word, max_corrections).entered();
        if max_corrections == 0 || !self.is_loaded() {
            return Vec::new();
        }

        if let Some(exact) = self.weighted_word(word) {
            debug!("exact hit, skipping variations");
            return vec![exact];
        }

        let mut corrections = Vec::new();
        for variation in self.corrector.variations(word) {
            if let Some(found) = self.weighted_word(&variation) {
                corrections.push(found);
                if corrections.len() == max_corrections {
                    break;
                }
            }
        }
        debug!(count = corrections.len());
        corrections
    }

    /// Cached unigram lookup, keyed by the whole query word. Resolved
    /// offsets are stored; absent words are re-walked each time.
    fn find_unigram(&self, word: &str) -> Option<u32> {
        if let Some(&node) = self.unigram_cache.read().unwrap().get(word) {
            return Some(node);
        }
        let node = self.image.find_unigram(word)?;
        self.unigram_cache
            .write()
            .unwrap()
            .insert(word.to_string(), node);
        Some(node)
    }

    /// Cached n-gram lookup, keyed by the unigram leaf sequence.
    fn find_ngram(&self, leaves: &[u32]) -> Option<u32> {
        if let Some(&node) = self.ngram_cache.read().unwrap().get(leaves) {
            return Some(node);
        }
        let node = self.image.find_ngram(leaves)?;
        self.ngram_cache
            .write()
            .unwrap()
            .insert(leaves.to_vec(), node);
        Some(node)
    }
}
