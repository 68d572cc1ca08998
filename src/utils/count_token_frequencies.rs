use crate::types::{Token, TokenFrequencyMap};

/// Counts the frequency of tokens in the given list.
///
/// # Arguments
/// * `tokens` - A slice of tokens to analyze.
///
/// # Returns
/// * A `TokenFrequencyMap` where the keys are the distinct tokens and the
///   values are their respective frequencies.
///
/// # Example
/// ```
/// use word_frequency::count_token_frequencies;
///
/// let tokens = vec!["more".to_string(), "nebo".to_string(), "more".to_string()];
/// let frequencies = count_token_frequencies(&tokens);
/// assert_eq!(frequencies.get("more"), Some(&2));
/// assert_eq!(frequencies.get("nebo"), Some(&1));
/// ```
pub fn count_token_frequencies(tokens: &[Token]) -> TokenFrequencyMap {
    let mut frequencies = TokenFrequencyMap::new();

    for token in tokens {
        *frequencies.entry(token.clone()).or_insert(0) += 1;
    }

    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tokens_yield_empty_map() {
        assert!(count_token_frequencies(&[]).is_empty());
    }

    #[test]
    fn test_counts_sum_to_token_count() {
        let tokens: Vec<Token> = "a b a c a b"
            .split_whitespace()
            .map(|token| token.to_string())
            .collect();

        let frequencies = count_token_frequencies(&tokens);

        assert_eq!(frequencies.values().sum::<usize>(), tokens.len());
        assert_eq!(frequencies.get("a"), Some(&3));
        assert_eq!(frequencies.get("b"), Some(&2));
        assert_eq!(frequencies.get("c"), Some(&1));
    }
}
