/// Croatian function words excluded from frequency reporting by default.
///
/// Entries are pre-lowercased so they match the output of the `Normalizer`.
pub const STOP_WORDS: &[&str] = &[
    "i", "u", "na", "je", "se", "su", "s", "za", "o", "a", "pa", "te", "li", "da", "ali", "bi",
    "bio", "bila", "što", "ga", "joj", "ih",
];

/// Characters removed from the text before it is split into tokens.
///
/// Only these exact characters are stripped; hyphens and other word-internal
/// symbols survive normalization.
pub const PUNCTUATION: &[char] = &['.', ',', ':', ';', '?', '!', '"', '\'', '(', ')'];

/// Number of ranked entries reported when no explicit size is requested.
pub const DEFAULT_TOP_N: usize = 15;

/// Source file read by the CLI when no path is given.
pub const DEFAULT_SOURCE_PATH: &str = "tekst.txt";

/// File name suffix of gzip-compressed sources.
pub const GZIP_FILE_EXTENSION: &str = "gz";
