// Punch score: a heuristic quality score for an unbranded candidate.
//
// The score is a sum of non-negative rewards over the candidate's
// normalized tokens:
//
// - Power words: per token found in the word bank's power-word set.
// - Brevity: a large bonus up to 6 tokens, a small one up to 9.
// - Rhyme: when a rhyme tail is requested and the last token ends with it.
// - Rhythm: when the average token length lies strictly inside (3.5, 6.5).
// - Industry keywords: per token exactly matching one of the industry's
//   keywords (case-insensitive). Looked up by exact id; an unknown id earns
//   nothing here.
//
// The result is rounded to one decimal place. Scoring draws no randomness,
// so the same text, industry and rhyme tail always score the same.
//
// Consumed by generate.rs to rank filtered candidates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use slogan_lexicon::WordBank;
use slogan_lexicon::text::tokenize;

use crate::constraints::rhymes_with;

/// Weights and thresholds for the punch score. Tunable parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub power_word: f64,

    // Brevity
    pub short_bonus: f64,
    pub short_max_tokens: usize,
    pub medium_bonus: f64,
    pub medium_max_tokens: usize,

    pub rhyme: f64,

    // Rhythm: average token length strictly between the two bounds
    pub rhythm: f64,
    pub rhythm_min_avg: f64,
    pub rhythm_max_avg: f64,

    pub industry_keyword: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            power_word: 2.0,

            short_bonus: 3.0,
            short_max_tokens: 6,
            medium_bonus: 1.0,
            medium_max_tokens: 9,

            rhyme: 1.5,

            rhythm: 1.0,
            rhythm_min_avg: 3.5,
            rhythm_max_avg: 6.5,

            industry_keyword: 0.5,
        }
    }
}

/// Score an unbranded candidate.
pub fn score_candidate(
    candidate: &str,
    bank: &WordBank,
    industry_id: &str,
    rhyme_tail: &str,
    weights: &ScoringWeights,
) -> f64 {
    let tokens = tokenize(candidate);
    let n = tokens.len();
    let mut total = 0.0;

    let power_hits = tokens.iter().filter(|t| bank.is_power_word(t)).count();
    total += power_hits as f64 * weights.power_word;

    if n <= weights.short_max_tokens {
        total += weights.short_bonus;
    } else if n <= weights.medium_max_tokens {
        total += weights.medium_bonus;
    }

    if !rhyme_tail.is_empty() && rhymes_with(candidate, rhyme_tail) {
        total += weights.rhyme;
    }

    let letters: usize = tokens.iter().map(|t| t.chars().count()).sum();
    let avg_len = letters as f64 / n.max(1) as f64;
    if avg_len > weights.rhythm_min_avg && avg_len < weights.rhythm_max_avg {
        total += weights.rhythm;
    }

    let keywords: BTreeSet<String> = bank
        .industry(industry_id)
        .map(|i| i.keywords.iter().map(|k| k.to_lowercase()).collect())
        .unwrap_or_default();
    let keyword_hits = tokens.iter().filter(|t| keywords.contains(t.as_str())).count();
    total += keyword_hits as f64 * weights.industry_keyword;

    round_one_decimal(total)
}

/// Round to one decimal place, halves away from zero.
pub fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK: &str = r#"{
        "power_words": ["bold", "fresh", "smart"],
        "verbs": ["brew"],
        "outcomes": ["every day"],
        "negatives": ["fuss"],
        "industries": [
            {"id": "generic", "name": "Generic", "keywords": ["brand"], "benefits": ["value"], "audience": ["everyone"]},
            {"id": "coffee", "name": "Coffee", "keywords": ["Coffee", "roast"], "benefits": ["flavor"], "audience": ["risers"]}
        ]
    }"#;

    fn bank() -> WordBank {
        WordBank::from_json(BANK).unwrap()
    }

    fn score(text: &str, industry: &str, rhyme: &str) -> f64 {
        score_candidate(text, &bank(), industry, rhyme, &ScoringWeights::default())
    }

    #[test]
    fn test_power_words_and_brevity() {
        // 2 power words (4.0) + short bonus (3.0); avg len (4+5+4)/3 = 4.33 -> rhythm (1.0)
        assert_eq!(score("Bold Fresh Brew", "generic", ""), 8.0);
    }

    #[test]
    fn test_industry_keywords_case_insensitive() {
        // "bold" power (2.0) + "coffee" + "roast" keywords (1.0) + short (3.0)
        // avg len (4+6+5)/3 = 5.0 -> rhythm (1.0)
        assert_eq!(score("Bold Coffee Roast!", "coffee", ""), 7.0);
        // Same text under another industry loses the keyword bonus.
        assert_eq!(score("Bold Coffee Roast!", "generic", ""), 6.0);
        // Unknown industry: no fallback for keywords.
        assert_eq!(score("Bold Coffee Roast!", "shoes", ""), 6.0);
    }

    #[test]
    fn test_rhyme_bonus() {
        // short (3.0), avg len (3+2+4)/3 = 3.0 -> no rhythm
        assert_eq!(score("Let It Glow", "generic", ""), 3.0);
        assert_eq!(score("Let It Glow", "generic", "ow"), 4.5);
        assert_eq!(score("Let It Glow", "generic", "ite"), 3.0);
    }

    #[test]
    fn test_length_tiers() {
        // 7 tokens of length 1: medium bonus only.
        assert_eq!(score("a b c d e f g", "generic", ""), 1.0);
        // 10 tokens: no length bonus.
        assert_eq!(score("a b c d e f g h i j", "generic", ""), 0.0);
        // Empty text still earns the short bonus.
        assert_eq!(score("", "generic", ""), 3.0);
    }

    #[test]
    fn test_rhythm_bounds_are_exclusive() {
        // avg 3.5 exactly: "abc abcd" -> (3+4)/2
        assert_eq!(score("abc abcd", "generic", ""), 3.0);
        // avg 6.5 exactly: "abcdef abcdefg"
        assert_eq!(score("abcdef abcdefg", "generic", ""), 3.0);
        // avg 4.0
        assert_eq!(score("abcd abcd", "generic", ""), 4.0);
    }

    #[test]
    fn test_deterministic_and_single_decimal() {
        let bank = bank();
        let weights = ScoringWeights::default();
        let a = score_candidate("Smart Fresh Coffee For Every Morning", &bank, "coffee", "ing", &weights);
        for _ in 0..10 {
            assert_eq!(score_candidate("Smart Fresh Coffee For Every Morning", &bank, "coffee", "ing", &weights), a);
        }
        assert_eq!(round_one_decimal(a), a);
        assert!(a >= 0.0);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(7.25), 7.3);
        assert_eq!(round_one_decimal(3.04), 3.0);
        assert_eq!(round_one_decimal(0.0), 0.0);
    }
}
