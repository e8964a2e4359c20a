// Data-driven generator configuration.
//
// Every probability and numeric knob of the generation pipeline lives in
// `GeneratorConfig` rather than as a literal at the call site. The defaults
// reproduce the stock behavior (200 attempts, 45% Markov, 20% exclamation,
// 50/50 coin flips for description, tone and brand placement); a JSON file
// can override any subset of fields since every field is `#[serde(default)]`.
//
// Scoring weights are nested under `scoring`; see `scoring.rs`.

use serde::{Deserialize, Serialize};

use crate::scoring::ScoringWeights;

/// Tunable parameters for candidate generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Raw candidates drawn per generation request.
    pub candidate_attempts: usize,
    /// Probability a raw candidate comes from the Markov sampler rather than
    /// the template combiner.
    pub markov_probability: f64,
    /// Probability of appending `!` to a candidate that ends in a word
    /// character.
    pub exclamation_probability: f64,
    /// Probability of appending a `for <description words>` phrase when a
    /// description was supplied.
    pub description_probability: f64,
    /// Probability of prefixing a tone word when tones were selected.
    pub tone_probability: f64,
    /// Probability the brand is placed as a `Brand: ` prefix rather than a
    /// ` — Brand` suffix.
    pub brand_prefix_probability: f64,
    /// Minimum number of industry+generic corpus rows before the Markov chain
    /// is scoped to the industry instead of the whole corpus.
    pub min_scoped_rows: usize,
    /// Markov word cap for short/medium/any length preferences.
    pub markov_max_words: usize,
    /// Markov word cap for the long length preference.
    pub markov_max_words_long: usize,
    /// Extra sampler steps allowed beyond the word cap.
    pub markov_step_slack: usize,
    /// Leading description words used in the `for ...` phrase.
    pub description_words: usize,
    /// Leading tokens inspected by the alliteration constraint.
    pub alliteration_window: usize,
    /// Upper bound on the requested result count.
    pub max_count: usize,
    pub scoring: ScoringWeights,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            candidate_attempts: 200,
            markov_probability: 0.45,
            exclamation_probability: 0.2,
            description_probability: 0.5,
            tone_probability: 0.5,
            brand_prefix_probability: 0.5,
            min_scoped_rows: 5,
            markov_max_words: 8,
            markov_max_words_long: 12,
            markov_step_slack: 5,
            description_words: 3,
            alliteration_window: 4,
            max_count: 50,
            scoring: ScoringWeights::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            GeneratorConfig::from_json(r#"{"candidate_attempts": 50, "scoring": {"power_word": 3.0}}"#)
                .unwrap();
        assert_eq!(config.candidate_attempts, 50);
        assert_eq!(config.markov_probability, 0.45);
        assert_eq!(config.scoring.power_word, 3.0);
        assert_eq!(config.scoring.rhyme, 1.5);
    }

    #[test]
    fn test_roundtrip_json() {
        let config = GeneratorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_type() {
        assert!(GeneratorConfig::from_json(r#"{"candidate_attempts": "many"}"#).is_err());
    }
}
