use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are lowercase, punctuation-free words.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the total number of occurrences of a token within a text document.
pub type TokenFrequency = usize;

/// Represents a map of tokens to their frequency counts within a text document.
/// The key is the `Token`, and the value is the `TokenFrequency`.
///
/// Key order carries no meaning; use `sort_token_frequencies` or `top_n` for a
/// deterministic ordering.
pub type TokenFrequencyMap = HashMap<Token, TokenFrequency>;

/// `(Token, TokenFrequency)` pairs ordered by descending frequency.
pub type RankedTokenFrequencies = Vec<(Token, TokenFrequency)>;
