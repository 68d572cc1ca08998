pub mod document;
pub use document::{load_document, read_document, Document};

pub mod error;
pub use error::Error;

pub mod normalizer;
pub use normalizer::Normalizer;

pub mod stop_word_filter;
pub use stop_word_filter::StopWordFilter;

pub mod word_frequency_processor;
pub use word_frequency_processor::{
    StopWordStage, WordFrequencyConfig, WordFrequencyProcessor, WordFrequencyReport,
};
