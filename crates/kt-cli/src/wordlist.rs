//! Text word-list parsing for `ktool compile`.
//!
//! Unigram files hold one `word weight` pair per line; n-gram files one
//! `word ... word weight` phrase per line. Blank lines and `#` comments are
//! skipped. Weights above 255 clamp to 255, matching the single-byte
//! weight field of the image.

use std::fs;
use std::io;
use std::path::Path;

pub fn parse_unigrams(path: &Path) -> io::Result<Vec<(String, u8)>> {
    let text = fs::read_to_string(path)?;
    let mut out = Vec::new();
    for (lineno, line) in lines(&text) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[word, weight] = fields.as_slice() else {
            return Err(invalid(path, lineno, "expected `word weight`"));
        };
        out.push((word.to_string(), parse_weight(weight, path, lineno)?));
    }
    Ok(out)
}

pub fn parse_ngrams(path: &Path) -> io::Result<Vec<(Vec<String>, u8)>> {
    let text = fs::read_to_string(path)?;
    let mut out = Vec::new();
    for (lineno, line) in lines(&text) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some((&weight, words)) = fields.split_last() else {
            return Err(invalid(path, lineno, "expected `word ... word weight`"));
        };
        if words.is_empty() {
            return Err(invalid(path, lineno, "expected `word ... word weight`"));
        }
        let words = words.iter().map(|w| w.to_string()).collect();
        out.push((words, parse_weight(weight, path, lineno)?));
    }
    Ok(out)
}

fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(lineno, line)| (lineno, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_weight(field: &str, path: &Path, lineno: usize) -> io::Result<u8> {
    match field.parse::<u64>() {
        Ok(0) | Err(_) => Err(invalid(path, lineno, "weight must be a positive integer")),
        Ok(w) => Ok(w.min(255) as u8),
    }
}

fn invalid(path: &Path, lineno: usize, message: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("{}:{}: {message}", path.display(), lineno + 1),
    )
}
