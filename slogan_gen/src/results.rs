// Result list and its sorted/filtered views.
//
// `ResultSet` holds the branded results of the latest generation twice: the
// live list and an original-order snapshot. Views never reorder storage;
// they return borrowed, filtered, stably sorted slices for display or
// export. `SortMode::Custom` reads from the snapshot, so it always shows
// generation order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use slogan_lexicon::text::token_count;

use crate::generate::Candidate;

/// Ordering applied by `ResultSet::view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Highest score first.
    #[default]
    Score,
    /// Fewest tokens first.
    Length,
    /// Case-insensitive code-point order. Punctuation sorts before letters
    /// and accented letters sort after `z`.
    Alpha,
    /// Generation order.
    Custom,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "score" => Ok(SortMode::Score),
            "length" => Ok(SortMode::Length),
            "alpha" => Ok(SortMode::Alpha),
            "custom" => Ok(SortMode::Custom),
            other => Err(format!("unknown sort mode {other:?} (expected score, length, alpha or custom)")),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::Score => "score",
            SortMode::Length => "length",
            SortMode::Alpha => "alpha",
            SortMode::Custom => "custom",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    live: Vec<Candidate>,
    original: Vec<Candidate>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both the live list and the snapshot.
    pub fn replace(&mut self, results: Vec<Candidate>) {
        self.original = results.clone();
        self.live = results;
    }

    pub fn clear(&mut self) {
        self.live.clear();
        self.original.clear();
    }

    pub fn live(&self) -> &[Candidate] {
        &self.live
    }

    pub fn original(&self) -> &[Candidate] {
        &self.original
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Results whose text contains `search` (case-insensitive; empty matches
    /// everything), ordered by `sort`.
    pub fn view(&self, search: &str, sort: SortMode) -> Vec<&Candidate> {
        let needle = search.trim().to_lowercase();
        let source = match sort {
            SortMode::Custom => &self.original,
            _ => &self.live,
        };
        let mut out: Vec<&Candidate> = source
            .iter()
            .filter(|c| needle.is_empty() || c.text.to_lowercase().contains(&needle))
            .collect();
        match sort {
            SortMode::Score => out.sort_by(|a, b| b.score.total_cmp(&a.score)),
            SortMode::Length => out.sort_by_key(|c| token_count(&c.text)),
            SortMode::Alpha => out.sort_by(|a, b| compare_alpha(&a.text, &b.text)),
            SortMode::Custom => {}
        }
        out
    }
}

/// Compares lowercased text by Unicode code point, not by locale collation.
fn compare_alpha(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> ResultSet {
        let mut set = ResultSet::new();
        set.replace(vec![
            Candidate {
                text: "Acme: Brew Bold Every Day".to_string(),
                score: 6.0,
            },
            Candidate {
                text: "Fresh Roast — Acme".to_string(),
                score: 8.5,
            },
            Candidate {
                text: "acme: Coffee Without The Fuss".to_string(),
                score: 6.0,
            },
            Candidate {
                text: "Sip Slow".to_string(),
                score: 4.0,
            },
        ]);
        set
    }

    fn texts<'a>(view: &[&'a Candidate]) -> Vec<&'a str> {
        view.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_sort_by_score_is_stable() {
        let set = results();
        assert_eq!(
            texts(&set.view("", SortMode::Score)),
            vec![
                "Fresh Roast — Acme",
                "Acme: Brew Bold Every Day",
                "acme: Coffee Without The Fuss",
                "Sip Slow",
            ]
        );
    }

    #[test]
    fn test_sort_by_length() {
        let set = results();
        // "Fresh Roast — Acme" has three tokens; the bullet is not a word.
        assert_eq!(
            texts(&set.view("", SortMode::Length)),
            vec![
                "Sip Slow",
                "Fresh Roast — Acme",
                "Acme: Brew Bold Every Day",
                "acme: Coffee Without The Fuss",
            ]
        );
    }

    #[test]
    fn test_sort_alpha_ignores_case() {
        let set = results();
        assert_eq!(
            texts(&set.view("", SortMode::Alpha)),
            vec![
                "Acme: Brew Bold Every Day",
                "acme: Coffee Without The Fuss",
                "Fresh Roast — Acme",
                "Sip Slow",
            ]
        );
    }

    #[test]
    fn test_sort_alpha_is_code_point_order() {
        let mut set = ResultSet::new();
        set.replace(
            ["Zest Up", "\"Quoted\" Brew", "Éclair Mornings", "acme Roast"]
                .into_iter()
                .map(|text| Candidate {
                    text: text.to_string(),
                    score: 1.0,
                })
                .collect(),
        );
        assert_eq!(
            texts(&set.view("", SortMode::Alpha)),
            vec!["\"Quoted\" Brew", "acme Roast", "Zest Up", "Éclair Mornings"]
        );
    }

    #[test]
    fn test_custom_is_original_order_filtered() {
        let set = results();
        assert_eq!(
            texts(&set.view("ACME", SortMode::Custom)),
            vec![
                "Acme: Brew Bold Every Day",
                "Fresh Roast — Acme",
                "acme: Coffee Without The Fuss",
            ]
        );
    }

    #[test]
    fn test_search_without_matches() {
        let set = results();
        assert!(set.view("tea", SortMode::Score).is_empty());
        assert_eq!(set.view("  ", SortMode::Score).len(), 4);
    }

    #[test]
    fn test_clear() {
        let mut set = results();
        set.clear();
        assert!(set.is_empty());
        assert!(set.original().is_empty());
        assert!(set.view("", SortMode::Custom).is_empty());
    }

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!("score".parse::<SortMode>(), Ok(SortMode::Score));
        assert_eq!(" Alpha ".parse::<SortMode>(), Ok(SortMode::Alpha));
        assert_eq!("custom".parse::<SortMode>(), Ok(SortMode::Custom));
        assert!("random".parse::<SortMode>().is_err());
        assert_eq!(SortMode::Length.to_string(), "length");
    }
}
