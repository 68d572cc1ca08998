use crate::types::{RankedTokenFrequencies, TokenFrequencyMap};

/// Sorts a mapping of tokens to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two tokens have the same frequency, sorts by token in
///   ascending lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use word_frequency::{sort_token_frequencies, TokenFrequencyMap};
///
/// let mut frequencies = TokenFrequencyMap::new();
/// frequencies.insert("nebo".to_string(), 10);
/// frequencies.insert("more".to_string(), 15);
/// frequencies.insert("kuća".to_string(), 10);
///
/// let sorted = sort_token_frequencies(&frequencies);
/// assert_eq!(sorted, vec![
///     ("more".to_string(), 15),
///     ("kuća".to_string(), 10),
///     ("nebo".to_string(), 10)
/// ]);
/// ```
pub fn sort_token_frequencies(frequencies: &TokenFrequencyMap) -> RankedTokenFrequencies {
    let mut sorted: RankedTokenFrequencies = frequencies
        .iter()
        .map(|(token, frequency)| (token.to_owned(), *frequency))
        .collect();

    sorted.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by token (ascending)
    });

    sorted
}

/// Returns the `n` most frequent tokens, ordered as by `sort_token_frequencies`.
///
/// The result holds `min(n, frequencies.len())` entries; `n = 0` yields an empty list.
pub fn top_n(frequencies: &TokenFrequencyMap, n: usize) -> RankedTokenFrequencies {
    if n == 0 {
        return Vec::new();
    }

    let mut sorted = sort_token_frequencies(frequencies);
    sorted.truncate(n);

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequency_map(entries: &[(&str, usize)]) -> TokenFrequencyMap {
        entries
            .iter()
            .map(|(token, frequency)| (token.to_string(), *frequency))
            .collect()
    }

    #[test]
    fn test_top_n_breaks_ties_deterministically() {
        let frequencies = frequency_map(&[("a", 2), ("b", 2), ("c", 1)]);

        let first = top_n(&frequencies, 2);
        let second = top_n(&frequencies, 2);

        assert_eq!(first, vec![("a".to_string(), 2), ("b".to_string(), 2)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_top_n_zero_is_empty() {
        let frequencies = frequency_map(&[("a", 2)]);

        assert!(top_n(&frequencies, 0).is_empty());
    }

    #[test]
    fn test_top_n_of_empty_map_is_empty() {
        assert!(top_n(&TokenFrequencyMap::new(), 5).is_empty());
    }

    #[test]
    fn test_top_n_larger_than_map_returns_all() {
        let frequencies = frequency_map(&[("a", 1), ("b", 3)]);

        assert_eq!(
            top_n(&frequencies, 10),
            vec![("b".to_string(), 3), ("a".to_string(), 1)]
        );
    }
}
