// Word banks, slogan corpus, and text normalization for the slogan generator.
//
// Provides the read-only vocabulary the template combiner and scorer draw
// from, the append-only example corpus the Markov chain is trained on, and
// the normalizer every comparison runs through. No randomness lives here.
//
// Architecture:
// - `text.rs`: `normalize`, `tokenize`, `title_case` and friends
// - `types.rs`: `Industry` and the raw `WordBankFile` JSON shape
// - `corpus.rs`: `Corpus` / `CorpusRow` and the tolerant CSV loader
// - `error.rs`: `LexiconError`
// - `lib.rs` (this file): `WordBank`, the validated, immutable vocabulary
//
// The default dataset lives in `data/wordbanks.json` and `data/slogans.csv`
// and is embedded at compile time via `include_str!`, so the CLI and tests
// work without any files on disk. `WordBank::from_json` / `from_file` load
// replacements.

pub mod corpus;
pub mod error;
pub mod text;
pub mod types;

pub use corpus::{Corpus, CorpusRow, parse_corpus_csv};
pub use error::LexiconError;
pub use types::{GENERIC_INDUSTRY, Industry, WordBankFile};

use std::collections::BTreeSet;
use std::path::Path;

/// A validated word bank.
///
/// Construction guarantees at least one industry, unique industry ids, and
/// non-empty word lists for every slot the template combiner fills, so the
/// generator never has to handle a half-loaded vocabulary.
#[derive(Debug, Clone)]
pub struct WordBank {
    power_words: Vec<String>,
    power_set: BTreeSet<String>,
    verbs: Vec<String>,
    outcomes: Vec<String>,
    negatives: Vec<String>,
    industries: Vec<Industry>,
}

impl WordBank {
    /// Parse and validate a word bank from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let file: WordBankFile = serde_json::from_str(json)?;
        Self::from_file_data(file)
    }

    /// Read, parse and validate a word-bank JSON file.
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        Self::from_json(&corpus::read_file(path)?)
    }

    /// Validate an already-parsed word-bank document.
    pub fn from_file_data(file: WordBankFile) -> Result<Self, LexiconError> {
        if file.industries.is_empty() {
            return Err(LexiconError::NoIndustries);
        }
        let mut ids = BTreeSet::new();
        for industry in &file.industries {
            if !ids.insert(industry.id.as_str()) {
                return Err(LexiconError::DuplicateIndustry(industry.id.clone()));
            }
            require_nonempty(&industry.keywords, &format!("industries.{}.keywords", industry.id))?;
            require_nonempty(&industry.benefits, &format!("industries.{}.benefits", industry.id))?;
            require_nonempty(&industry.audience, &format!("industries.{}.audience", industry.id))?;
        }
        require_nonempty(&file.power_words, "power_words")?;
        require_nonempty(&file.verbs, "verbs")?;
        require_nonempty(&file.outcomes, "outcomes")?;
        require_nonempty(&file.negatives, "negatives")?;

        let power_set = file.power_words.iter().map(|w| text::normalize(w)).collect();
        tracing::debug!(
            industries = file.industries.len(),
            power_words = file.power_words.len(),
            "word bank loaded"
        );
        Ok(WordBank {
            power_words: file.power_words,
            power_set,
            verbs: file.verbs,
            outcomes: file.outcomes,
            negatives: file.negatives,
            industries: file.industries,
        })
    }

    pub fn power_words(&self) -> &[String] {
        &self.power_words
    }

    pub fn verbs(&self) -> &[String] {
        &self.verbs
    }

    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    pub fn negatives(&self) -> &[String] {
        &self.negatives
    }

    /// All industries, in file order.
    pub fn industries(&self) -> &[Industry] {
        &self.industries
    }

    /// Whether a normalized token is a power word.
    pub fn is_power_word(&self, token: &str) -> bool {
        self.power_set.contains(token)
    }

    /// Exact lookup by id.
    pub fn industry(&self, id: &str) -> Option<&Industry> {
        self.industries.iter().find(|i| i.id == id)
    }

    /// Lookup by id, falling back to the first industry for unknown ids.
    pub fn industry_or_first(&self, id: &str) -> &Industry {
        self.industry(id).unwrap_or(&self.industries[0])
    }
}

fn require_nonempty(list: &[String], field: &str) -> Result<(), LexiconError> {
    if list.is_empty() {
        return Err(LexiconError::EmptyList {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Load the word bank embedded at compile time.
///
/// Panics if the embedded JSON is malformed (should never happen in a
/// released build).
pub fn default_word_bank() -> WordBank {
    let json = include_str!("../../data/wordbanks.json");
    WordBank::from_json(json).expect("embedded wordbanks.json is malformed")
}

/// Load the example corpus embedded at compile time.
pub fn default_corpus() -> Corpus {
    Corpus::from_csv(include_str!("../../data/slogans.csv"))
}
