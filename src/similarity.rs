//! Phrase similarity for fuzzy rules
//!
//! Both inputs are expected to be normalized already (see [`crate::normalize`]).

use ahash::AHashSet;

const TOKEN_WEIGHT: f64 = 0.6;
const SEQUENCE_WEIGHT: f64 = 0.4;
/// Below this token overlap the sequence ratio is not computed
const MIN_TOKEN_OVERLAP: f64 = 0.3;

/// Score how closely `text` matches `phrase` (0.0-1.0)
///
/// A phrase contained in the text scores 1.0. Otherwise the score blends the
/// share of phrase words present in the text with a character-level
/// longest-common-subsequence ratio.
pub fn calculate_similarity(text: &str, phrase: &str) -> f64 {
    if phrase.trim().is_empty() {
        return 0.0;
    }
    if text.contains(phrase) {
        return 1.0;
    }

    let overlap = token_overlap(text, phrase);
    if overlap < MIN_TOKEN_OVERLAP {
        return overlap * TOKEN_WEIGHT;
    }

    overlap * TOKEN_WEIGHT + sequence_ratio(text, phrase) * SEQUENCE_WEIGHT
}

/// Fraction of the phrase's distinct words that appear in the text
pub fn token_overlap(text: &str, phrase: &str) -> f64 {
    let phrase_tokens: AHashSet<&str> = phrase.split_whitespace().collect();
    if phrase_tokens.is_empty() {
        return 0.0;
    }
    let text_tokens: AHashSet<&str> = text.split_whitespace().collect();

    text_tokens.intersection(&phrase_tokens).count() as f64 / phrase_tokens.len() as f64
}

/// 2 * LCS / total length, in the spirit of difflib's ratio
fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    (2 * lcs_len(&a, &b)) as f64 / total as f64
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    // Two rolling rows
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contained_phrase() {
        assert!((calculate_similarity("please tell me a joke", "tell me a joke") - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_missing_filler_word() {
        let score = calculate_similarity("tell me joke", "tell me a joke");
        assert!(score > 0.8 && score < 1.0);
    }

    #[test]
    fn test_unrelated() {
        assert!(calculate_similarity("hello world", "delete my account") < 0.3);
    }

    #[test]
    fn test_token_overlap() {
        assert!((token_overlap("my account", "delete my account") - 2.0 / 3.0).abs() < 0.001);
        assert_eq!(token_overlap("anything", ""), 0.0);
    }
}
