use crate::corrector::Corrector;
use crate::dict::BinaryDictionary;

use super::{test_builder, test_dict};

#[test]
fn exists_known_words() {
    let dict = test_dict();
    assert!(dict.exists("hello"));
    assert!(dict.exists("a"));
    assert!(!dict.exists("bonjour"));
    assert!(!dict.exists("h"));
}

#[test]
fn prefixes_are_not_words() {
    let dict = test_dict();
    assert!(!dict.exists("yo"));
    assert!(dict.exists("you"));
    assert!(dict.exists("your"));
}

#[test]
fn weighted_word_reports_stored_weight() {
    let dict = test_dict();
    assert_eq!(dict.weighted_word("there").unwrap().weight, 140);
    assert!(dict.weighted_word("ther").is_none());
    assert!(dict.weighted_word("").is_none());
}

#[test]
fn predictions_after_hello() {
    let dict = test_dict();
    let predictions = dict.predictions(&["hello"], 4);
    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0].word, "you");
    assert_eq!(predictions[0].weight, 25);
    assert_eq!(predictions[1].word, "there");
    assert_eq!(predictions[1].weight, 20);
}

#[test]
fn predictions_after_how_are() {
    let dict = test_dict();
    let predictions = dict.predictions(&["how", "are"], 4);
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].word, "you");
    assert_eq!(predictions[0].weight, 80);
}

#[test]
fn predictions_respect_limit() {
    let dict = test_dict();
    let predictions = dict.predictions(&["hello"], 1);
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].word, "you");
    assert!(dict.predictions(&["hello"], 0).is_empty());
}

#[test]
fn predictions_empty_context() {
    assert!(test_dict().predictions(&[], 4).is_empty());
}

#[test]
fn predictions_unknown_context_word() {
    let dict = test_dict();
    assert!(dict.predictions(&["bonjour"], 4).is_empty());
    assert!(dict.predictions(&["hello", "bonjour"], 4).is_empty());
}

#[test]
fn predictions_skip_phrase_interior_nodes() {
    // [you] continues only into the unweighted chain node [you are];
    // nothing predictable lives directly under it.
    let dict = test_dict();
    assert!(dict.predictions(&["you"], 4).is_empty());
    let after_are = dict.predictions(&["you", "are"], 4);
    assert_eq!(after_are.len(), 1);
    assert_eq!(after_are[0].word, "there");
    assert_eq!(after_are[0].weight, 30);
}

#[test]
fn corrections_exact_word_short_circuits() {
    let dict = test_dict();
    let corrections = dict.corrections("you", 100);
    assert_eq!(corrections.len(), 1);
    assert_eq!(corrections[0].word, "you");
    assert_eq!(corrections[0].weight, 200);
}

#[test]
fn corrections_single_edit() {
    let dict = test_dict();
    let corrections = dict.corrections("yuu", 100);
    assert_eq!(corrections.len(), 1);
    assert_eq!(corrections[0].word, "you");
    assert!(corrections.iter().all(|c| c.word != "yuu"));
}

#[test]
fn corrections_no_match_within_one_edit() {
    assert!(test_dict().corrections("xyz", 100).is_empty());
}

#[test]
fn corrections_zero_limit_even_on_exact_hit() {
    let dict = test_dict();
    assert!(dict.corrections("you", 0).is_empty());
    assert!(dict.corrections("xyz", 0).is_empty());
}

#[test]
fn corrections_keep_duplicate_edits() {
    // Deleting either 'a' of "aa" lands on the word "a".
    let dict = test_dict();
    let corrections = dict.corrections("aa", 100);
    assert_eq!(corrections.len(), 2);
    assert!(corrections.iter().all(|c| c.word == "a" && c.weight == 200));
}

#[test]
fn corrections_truncate() {
    assert_eq!(test_dict().corrections("aa", 1).len(), 1);
}

#[test]
fn corrections_with_custom_alphabet() {
    let dict = test_dict().with_corrector(Corrector::with_alphabet("y"));
    let corrections = dict.corrections("ou", 10);
    assert_eq!(corrections.len(), 1);
    assert_eq!(corrections[0].word, "you");
}

#[test]
fn repeated_queries_are_identical() {
    let dict = test_dict();
    let first = dict.predictions(&["how", "are"], 4);
    let again = dict.predictions(&["how", "are"], 4);
    assert_eq!(first, again);

    let first = dict.corrections("yuu", 10);
    let again = dict.corrections("yuu", 10);
    assert_eq!(first, again);

    assert_eq!(dict.exists("hello"), dict.exists("hello"));
}

#[test]
fn unloaded_dictionary_answers_empty() {
    let dict = BinaryDictionary::empty();
    assert!(!dict.is_loaded());
    assert!(!dict.exists("hello"));
    assert!(dict.predictions(&["hello"], 4).is_empty());
    assert!(dict.corrections("yuu", 4).is_empty());
    assert_eq!(dict.stats(), (0, 0, 0));
}

#[test]
fn stats_report_header_counts() {
    let image = test_builder().build().unwrap();
    let len = image.len();
    let dict = BinaryDictionary::from_bytes(image).unwrap();
    assert_eq!(dict.stats(), (4, 4, len));
}

#[test]
fn shared_across_threads() {
    let dict = std::sync::Arc::new(test_dict());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dict = dict.clone();
            std::thread::spawn(move || {
                assert!(dict.exists("hello"));
                assert_eq!(dict.predictions(&["how", "are"], 4).len(), 1);
                assert_eq!(dict.corrections("yuu", 10).len(), 1);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
