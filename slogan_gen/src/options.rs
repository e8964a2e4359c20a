// Generation request options.
//
// `GenerationOptions` is the full set of user constraints the orchestrator
// consumes. Callers build it from raw form/CLI input through the helpers
// here: `split_phrases` for the comma-separated must/avoid fields,
// `LengthPref::parse` for the length selector, and `normalize_rhyme_tail` /
// `GenerationOptions::clamped_count` for the remaining free-text fields.

use serde::{Deserialize, Serialize};
use slogan_lexicon::GENERIC_INDUSTRY;

/// Desired slogan length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPref {
    /// 2–4 tokens.
    Short,
    /// 4–7 tokens.
    #[default]
    Medium,
    /// 7–12 tokens.
    Long,
    /// No length constraint.
    Any,
}

impl LengthPref {
    /// Parse a length selector. Unknown values mean "unconstrained".
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "short" => LengthPref::Short,
            "medium" => LengthPref::Medium,
            "long" => LengthPref::Long,
            _ => LengthPref::Any,
        }
    }

    /// Inclusive token-count bounds, or `None` when unconstrained.
    pub fn bounds(self) -> Option<(usize, usize)> {
        match self {
            LengthPref::Short => Some((2, 4)),
            LengthPref::Medium => Some((4, 7)),
            LengthPref::Long => Some((7, 12)),
            LengthPref::Any => None,
        }
    }

    /// Word count template output is truncated to.
    pub fn template_target(self) -> usize {
        match self {
            LengthPref::Short => 4,
            LengthPref::Long => 10,
            LengthPref::Medium | LengthPref::Any => 7,
        }
    }
}

/// Everything a generation request is parameterized by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Brand name injected into final results. Empty means no branding.
    pub brand: String,
    /// Free-text product description; its first words may be appended to
    /// template output.
    pub description: String,
    pub industry_id: String,
    /// Tone words that may prefix template output.
    pub tones: Vec<String>,
    pub length: LengthPref,
    /// Phrases every result must contain (normalized substring match).
    pub must_include: Vec<String>,
    /// Phrases no result may contain.
    pub avoid: Vec<String>,
    /// Required initial letter for alliteration, lowercased.
    pub alliteration: Option<char>,
    /// Required ending of the last word, lowercased, leading hyphen removed.
    pub rhyme_tail: String,
    pub count: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            brand: String::new(),
            description: String::new(),
            industry_id: GENERIC_INDUSTRY.to_string(),
            tones: Vec::new(),
            length: LengthPref::Medium,
            must_include: Vec::new(),
            avoid: Vec::new(),
            alliteration: None,
            rhyme_tail: String::new(),
            count: 12,
        }
    }
}

impl GenerationOptions {
    /// `count` clamped into `[1, max_count]`.
    pub fn clamped_count(&self, max_count: usize) -> usize {
        self.count.clamp(1, max_count.max(1))
    }
}

/// Split a comma-separated phrase list, trimming entries and dropping empties.
pub fn split_phrases(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercase a rhyme tail and strip one leading hyphen (`"-OW"` -> `"ow"`).
pub fn normalize_rhyme_tail(s: &str) -> String {
    let lower = s.trim().to_lowercase();
    lower.strip_prefix('-').unwrap_or(&lower).to_string()
}

/// First character of an alliteration field, lowercased. Anything after the
/// first character is ignored; use `alliteration_letter` to reject it.
pub fn parse_alliteration(s: &str) -> Option<char> {
    s.trim().chars().next().and_then(|c| c.to_lowercase().next())
}

/// Strict form of `parse_alliteration` for user input: exactly one
/// character after trimming, lowercased.
pub fn alliteration_letter(s: &str) -> Result<char, String> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c.to_lowercase().next().unwrap_or(c)),
        _ => Err(format!("alliteration expects a single letter, got {s:?}")),
    }
}
