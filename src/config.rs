use crate::constants::DEFAULT_TOP_N;
use crate::models::{StopWordStage, WordFrequencyConfig};

pub const DEFAULT_WORD_FREQUENCY_CONFIG: WordFrequencyConfig = WordFrequencyConfig {
    top_n: DEFAULT_TOP_N,
    stop_word_stage: StopWordStage::BeforeCounting,
};
