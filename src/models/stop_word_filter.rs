use crate::constants::STOP_WORDS;
use crate::types::{Token, TokenFrequencyMap, TokenRef};
use crate::Error;

use csv::{ReaderBuilder, Trim};
use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// A filter removing stop words from a token sequence or a frequency map.
///
/// Stop words are stored lowercase, matching the case folding applied by the
/// `Normalizer`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopWordFilter {
    stop_words: HashSet<Token>,
}

impl Default for StopWordFilter {
    fn default() -> Self {
        Self::from_list(STOP_WORDS)
    }
}

impl StopWordFilter {
    /// Create a filter from a custom list of stop words.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stop_words: words
                .iter()
                .filter_map(|word| Self::preprocess_stop_word(word))
                .collect(),
        }
    }

    /// Create an empty filter (no filtering).
    pub fn empty() -> Self {
        Self {
            stop_words: HashSet::new(),
        }
    }

    /// Load stop words from CSV data.
    ///
    /// Every non-empty field of every record is a stop word, so both
    /// one-word-per-line files and comma-separated lists are accepted. Lines
    /// starting with `#` are ignored.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut stop_words = HashSet::new();

        for record in reader.records() {
            let record = record?;

            stop_words.extend(record.iter().filter_map(Self::preprocess_stop_word));
        }

        debug!("Loaded {} stop words", stop_words.len());

        Ok(Self { stop_words })
    }

    /// Load stop words from a CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::IoError(err),
        })?;

        Self::from_csv_reader(file)
    }

    pub fn contains(&self, token: &TokenRef) -> bool {
        self.stop_words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }

    /// Removes every stop word from the tokens, preserving the order of the rest.
    ///
    /// ```
    /// use word_frequency::StopWordFilter;
    ///
    /// let tokens = vec!["i".to_string(), "kuća".to_string(), "je".to_string()];
    /// let filtered = StopWordFilter::default().filter_tokens(&tokens);
    /// assert_eq!(filtered, vec!["kuća"]);
    /// ```
    pub fn filter_tokens(&self, tokens: &[Token]) -> Vec<Token> {
        tokens
            .iter()
            .filter(|token| !self.contains(token))
            .cloned()
            .collect()
    }

    /// Returns a new map without stop-word keys. Counts of retained keys are unchanged.
    pub fn filter_map(&self, frequencies: &TokenFrequencyMap) -> TokenFrequencyMap {
        frequencies
            .iter()
            .filter(|(token, _)| !self.contains(token))
            .map(|(token, frequency)| (token.clone(), *frequency))
            .collect()
    }

    /// Pre-process a stop word by trimming it and converting to lowercase
    fn preprocess_stop_word(word: &str) -> Option<Token> {
        let word = word.trim();

        if word.is_empty() {
            None
        } else {
            Some(word.to_lowercase())
        }
    }
}
