//! Command-line tool around the kt-core dictionary engine.

pub mod commands;
pub mod wordlist;
