use std::fs;
use std::path::Path;
use std::process;

use kt_core::dict::{BinaryDictionary, DictBuilder};

use crate::wordlist;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn compile(unigrams: &str, ngrams: &[String], output: &str) {
    let mut builder = DictBuilder::new();

    let words = die!(
        wordlist::parse_unigrams(Path::new(unigrams)),
        "Error reading unigrams: {}"
    );
    for (word, weight) in &words {
        die!(builder.add_unigram(word, *weight), "Error adding word: {}");
    }

    let mut phrase_count = 0;
    for file in ngrams {
        let phrases = die!(
            wordlist::parse_ngrams(Path::new(file)),
            "Error reading ngrams: {}"
        );
        for (phrase, weight) in &phrases {
            let phrase: Vec<&str> = phrase.iter().map(String::as_str).collect();
            die!(builder.add_ngram(&phrase, *weight), "Error adding phrase: {}");
        }
        phrase_count += phrases.len();
    }

    eprintln!("Encoding {} words, {phrase_count} phrases...", words.len());
    die!(
        builder.save(Path::new(output)),
        "Error writing dictionary: {}"
    );

    let file_size = fs::metadata(output).map(|m| m.len()).unwrap_or(0);
    eprintln!("Wrote {output} ({:.1} KB)", file_size as f64 / 1024.0);
}

pub fn info(file: &str) {
    let (unigram_roots, ngram_roots, len) = open(file).stats();
    println!("Image size:            {len} bytes");
    println!("Unigram root children: {unigram_roots}");
    println!("N-gram root children:  {ngram_roots}");
}

pub fn lookup(file: &str, word: &str) {
    match open(file).weighted_word(word) {
        Some(found) => println!("{} {}", found.word, found.weight),
        None => {
            eprintln!("Not in dictionary: {word}");
            process::exit(1);
        }
    }
}

pub fn predict(file: &str, words: &[String], limit: usize) {
    let dict = open(file);
    let context: Vec<&str> = words.iter().map(String::as_str).collect();
    for prediction in dict.predictions(&context, limit) {
        println!("{} {}", prediction.word, prediction.weight);
    }
}

pub fn correct(file: &str, word: &str, limit: usize) {
    let dict = open(file);
    for correction in dict.corrections(word, limit) {
        println!("{} {}", correction.word, correction.weight);
    }
}

fn open(file: &str) -> BinaryDictionary {
    die!(
        BinaryDictionary::open(Path::new(file)),
        "Error opening dictionary: {}"
    )
}
