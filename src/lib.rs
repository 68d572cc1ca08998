mod config;
pub use config::DEFAULT_WORD_FREQUENCY_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    load_document, read_document, Document, Error, Normalizer, StopWordFilter, StopWordStage,
    WordFrequencyConfig, WordFrequencyProcessor, WordFrequencyReport,
};
pub mod types;
pub mod utils;
pub use types::{RankedTokenFrequencies, Token, TokenFrequency, TokenFrequencyMap, TokenRef};
pub use utils::{count_token_frequencies, sort_token_frequencies, top_n};

use std::path::Path;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Normalizes `text` and ranks its word frequencies, excluding the default stop words.
pub fn analyze_text(text: &str) -> WordFrequencyReport {
    analyze_text_with_custom_config(
        &DEFAULT_WORD_FREQUENCY_CONFIG,
        &StopWordFilter::default(),
        text,
    )
}

pub fn analyze_text_with_custom_config(
    config: &WordFrequencyConfig,
    stop_word_filter: &StopWordFilter,
    text: &str,
) -> WordFrequencyReport {
    WordFrequencyProcessor::new(config, stop_word_filter).process_text_doc(text)
}

/// Loads the file at `path` and ranks its word frequencies, excluding the default stop words.
///
/// Nothing is counted when the file cannot be loaded.
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<WordFrequencyReport, Error> {
    analyze_file_with_custom_config(
        &DEFAULT_WORD_FREQUENCY_CONFIG,
        &StopWordFilter::default(),
        path,
    )
}

pub fn analyze_file_with_custom_config<P: AsRef<Path>>(
    config: &WordFrequencyConfig,
    stop_word_filter: &StopWordFilter,
    path: P,
) -> Result<WordFrequencyReport, Error> {
    let document = load_document(path)?;

    let report = WordFrequencyProcessor::new(config, stop_word_filter).process_document(&document);

    Ok(report)
}
