//! Dictionary tests over a small image built in memory.

mod queries;

use super::{BinaryDictionary, DictBuilder};

/// Words and phrases shared by the query and property tests.
const UNIGRAMS: &[(&str, u8)] = &[
    ("a", 200),
    ("hi", 130),
    ("hello", 120),
    ("there", 140),
    ("how", 150),
    ("are", 80),
    ("you", 200),
    ("your", 100),
];

const NGRAMS: &[(&[&str], u8)] = &[
    (&["hello", "there"], 20),
    (&["hello", "you"], 25),
    (&["how", "are", "you"], 80),
    (&["you", "are", "there"], 30),
    (&["are", "you", "there"], 30),
];

fn test_builder() -> DictBuilder {
    let mut builder = DictBuilder::new();
    for &(word, weight) in UNIGRAMS {
        builder.add_unigram(word, weight).unwrap();
    }
    for &(words, weight) in NGRAMS {
        builder.add_ngram(words, weight).unwrap();
    }
    builder
}

fn test_dict() -> BinaryDictionary {
    BinaryDictionary::from_bytes(test_builder().build().unwrap()).unwrap()
}
