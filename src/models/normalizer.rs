use crate::constants::PUNCTUATION;
use crate::types::Token;

#[derive(Copy, Clone, Debug)]
pub struct Normalizer {
    punctuation: &'static [char],
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Configuration stripping the fixed punctuation set.
    pub fn new() -> Self {
        Self {
            punctuation: PUNCTUATION,
        }
    }

    /// Splits the text into lowercase, punctuation-free tokens in document order.
    ///
    /// Only the characters in `PUNCTUATION` are removed, by literal substitution;
    /// an empty or whitespace-only text yields no tokens.
    ///
    /// ```
    /// use word_frequency::Normalizer;
    ///
    /// let tokens = Normalizer::new().normalize("Da, ali... zar?");
    /// assert_eq!(tokens, vec!["da", "ali", "zar"]);
    /// ```
    pub fn normalize(&self, text: &str) -> Vec<Token> {
        let lowercased = text.to_lowercase();

        self.strip_punctuation(&lowercased)
            .split_whitespace()
            .map(|word| word.to_string())
            .collect()
    }

    fn strip_punctuation(&self, text: &str) -> String {
        self.punctuation
            .iter()
            .fold(text.to_string(), |stripped, &mark| {
                stripped.replace(mark, "")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_punctuation_keeps_hyphens() {
        let normalizer = Normalizer::new();

        assert_eq!(
            normalizer.strip_punctuation("(crno-bijelo)!"),
            "crno-bijelo"
        );
    }

    #[test]
    fn test_punctuation_between_words_joins_them() {
        // Removal is a substitution with nothing, not with whitespace.
        let tokens = Normalizer::new().normalize("kuća,auto");

        assert_eq!(tokens, vec!["kućaauto"]);
    }
}
