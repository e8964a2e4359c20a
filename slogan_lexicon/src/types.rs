// Word-bank data types as they appear in `data/wordbanks.json`.
//
// - `Industry`: one industry vertical with its id, display name and the keyword,
//   benefit and audience lists the template combiner slots into sentences.
// - `WordBankFile`: the raw top-level JSON document. `WordBank` (lib.rs)
//   validates it and adds the power-word membership set.

use serde::{Deserialize, Serialize};

/// The industry id every corpus row falls back to, and the tag that is
/// always included when scoping a Markov corpus to an industry.
pub const GENERIC_INDUSTRY: &str = "generic";

/// One industry vertical in the word bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    /// Unique identifier (e.g. `"coffee"`).
    pub id: String,
    /// Human-readable name (e.g. `"Coffee & Cafés"`).
    pub name: String,
    /// Domain nouns. Also earn the scorer's industry-keyword bonus.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Benefit phrases ("rich flavor", "zero downtime").
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Audience phrases ("early risers", "growing teams").
    #[serde(default)]
    pub audience: Vec<String>,
}

/// Top-level structure of the word-bank JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordBankFile {
    pub power_words: Vec<String>,
    pub verbs: Vec<String>,
    pub outcomes: Vec<String>,
    pub negatives: Vec<String>,
    pub industries: Vec<Industry>,
}
