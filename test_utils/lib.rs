#![allow(unused)] // Ignore due to all helpers not being utilized across all test files

#[path = "constants.rs"]
pub mod constants;

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};
use word_frequency::{Token, TokenFrequencyMap};

/// Writes `contents` to a temporary file ending in `suffix`; the file is removed on drop.
pub fn write_temp_document(contents: &[u8], suffix: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");

    file.write_all(contents).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");

    file
}

/// Writes `text` gzip-compressed to a temporary `.gz` file.
pub fn write_temp_gzip_document(text: &str) -> NamedTempFile {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(text.as_bytes())
        .expect("Failed to compress text");
    let compressed = encoder.finish().expect("Failed to finalize compression");

    write_temp_document(&compressed, ".txt.gz")
}

pub fn tokens(words: &[&str]) -> Vec<Token> {
    words.iter().map(|word| word.to_string()).collect()
}

pub fn frequency_map(entries: &[(&str, usize)]) -> TokenFrequencyMap {
    entries
        .iter()
        .map(|(token, frequency)| (token.to_string(), *frequency))
        .collect()
}
