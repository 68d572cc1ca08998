use crate::types::{RankedTokenFrequencies, Token, TokenFrequencyMap};
use crate::utils::{count_token_frequencies, top_n};
use crate::{Document, Normalizer, StopWordFilter};

use log::{debug, info};

/// Where stop words are removed from the pipeline.
///
/// Filtering before or after counting yields identical counts for the
/// surviving tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StopWordStage {
    /// Remove stop words from the token sequence, then count.
    BeforeCounting,
    /// Count every token, then remove stop-word keys from the frequency map.
    AfterCounting,
    /// Keep stop words.
    Disabled,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WordFrequencyConfig {
    pub top_n: usize,
    pub stop_word_stage: StopWordStage,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordFrequencyReport {
    /// Normalized tokens, in document order, before stop-word filtering.
    pub tokens: Vec<Token>,
    /// Normalized tokens with stop words removed.
    pub filtered_tokens: Vec<Token>,
    /// Token frequencies, excluding stop words unless filtering is disabled.
    pub frequencies: TokenFrequencyMap,
    /// The most frequent entries of `frequencies`.
    pub top_tokens: RankedTokenFrequencies,
}

impl WordFrequencyReport {
    /// Number of words in the document, stop words included.
    pub fn total_token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn distinct_token_count(&self) -> usize {
        self.frequencies.len()
    }
}

pub struct WordFrequencyProcessor<'a> {
    config: &'a WordFrequencyConfig,
    stop_word_filter: &'a StopWordFilter,
    normalizer: Normalizer,
}

impl<'a> WordFrequencyProcessor<'a> {
    pub fn new(config: &'a WordFrequencyConfig, stop_word_filter: &'a StopWordFilter) -> Self {
        WordFrequencyProcessor {
            config,
            stop_word_filter,
            normalizer: Normalizer::new(),
        }
    }

    pub fn process_document(&self, document: &Document) -> WordFrequencyReport {
        self.process_text_doc(document.as_str())
    }

    pub fn process_text_doc(&self, text: &str) -> WordFrequencyReport {
        info!("Normalizing...");
        let tokens = self.normalizer.normalize(text);
        debug!("Normalized {} tokens", tokens.len());

        let (filtered_tokens, frequencies) = match self.config.stop_word_stage {
            StopWordStage::BeforeCounting => {
                info!("Filtering stop words from tokens...");
                let filtered_tokens = self.stop_word_filter.filter_tokens(&tokens);

                info!("Counting token frequencies...");
                let frequencies = count_token_frequencies(&filtered_tokens);

                (filtered_tokens, frequencies)
            }
            StopWordStage::AfterCounting => {
                info!("Counting token frequencies...");
                let frequencies = count_token_frequencies(&tokens);

                info!("Filtering stop words from frequencies...");
                let frequencies = self.stop_word_filter.filter_map(&frequencies);

                (self.stop_word_filter.filter_tokens(&tokens), frequencies)
            }
            StopWordStage::Disabled => {
                info!("Counting token frequencies...");
                let frequencies = count_token_frequencies(&tokens);

                (tokens.clone(), frequencies)
            }
        };

        debug!(
            "Kept {} of {} tokens, {} distinct",
            filtered_tokens.len(),
            tokens.len(),
            frequencies.len()
        );

        info!("Ranking top {} tokens...", self.config.top_n);
        let top_tokens = top_n(&frequencies, self.config.top_n);

        WordFrequencyReport {
            tokens,
            filtered_tokens,
            frequencies,
            top_tokens,
        }
    }
}
