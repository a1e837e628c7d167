use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::bytes;

use super::DictError;

/// Unigram header: root-child count (3 bytes) + n-gram header offset (3 bytes).
pub(super) const UNIGRAM_HEADER_LEN: usize = 6;
/// Byte offset of the first unigram node (the dummy root).
pub(super) const ROOT_UNIGRAM: u32 = 6;

/// Backing storage for the image: either owned or memory-mapped.
enum ImageStorage {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

/// The immutable byte image encoding both tries.
///
/// Offsets are 24-bit byte addresses into this image. Reads assume the
/// layout invariants hold; a corrupt image panics on an out-of-range
/// offset rather than reading garbage.
pub(super) struct DictImage {
    storage: ImageStorage,
}

impl DictImage {
    pub(super) fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        // SAFETY: the file is opened read-only and the mapping is never
        // mutated; it lives as long as the image.
        let mmap = unsafe { Mmap::map(&file)? };
        if mmap.len() < UNIGRAM_HEADER_LEN {
            return Err(DictError::Truncated);
        }
        Ok(Self {
            storage: ImageStorage::Mapped(mmap),
        })
    }

    pub(super) fn from_bytes(bytes: Vec<u8>) -> Result<Self, DictError> {
        if bytes.len() < UNIGRAM_HEADER_LEN {
            return Err(DictError::Truncated);
        }
        Ok(Self {
            storage: ImageStorage::Owned(bytes),
        })
    }

    /// A zero-length image; no node is addressable and every walk misses.
    pub(super) fn unloaded() -> Self {
        Self {
            storage: ImageStorage::Owned(Vec::new()),
        }
    }

    pub(super) fn as_bytes(&self) -> &[u8] {
        match &self.storage {
            ImageStorage::Owned(v) => v,
            ImageStorage::Mapped(m) => m,
        }
    }

    pub(super) fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Single byte at `offset`.
    pub(super) fn u8_at(&self, offset: u32) -> u8 {
        bytes::read_u8(self.as_bytes(), offset as usize)
    }

    /// 3-byte big-endian unsigned integer at `offset`.
    pub(super) fn u24_at(&self, offset: u32) -> u32 {
        bytes::read_u24(self.as_bytes(), offset as usize)
    }

    /// Number of children under the unigram root (header bytes 0..3).
    pub(super) fn unigram_root_count(&self) -> u32 {
        self.u24_at(0)
    }

    /// Absolute offset of the n-gram header (header bytes 3..6).
    pub(super) fn ngrams_offset(&self) -> u32 {
        self.u24_at(3)
    }
}
