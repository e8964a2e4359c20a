// Constraint filter: accept or reject an unbranded candidate.
//
// Five predicates, all evaluated on normalized tokens of the candidate:
// length bounds, alliteration, rhyme tail, must-include and avoid. An empty
// constraint is always satisfied. A candidate passes only if every
// predicate holds.
//
// The predicates are exposed individually because the scorer reuses the
// rhyme check for its rhyme bonus.

use slogan_lexicon::text::{normalize, tokenize};

use crate::config::GeneratorConfig;
use crate::options::{GenerationOptions, LengthPref};

/// Token count within the preference's inclusive bounds. `Any` always passes.
pub fn meets_length(candidate: &str, length: LengthPref) -> bool {
    match length.bounds() {
        Some((min, max)) => {
            let n = tokenize(candidate).len();
            (min..=max).contains(&n)
        }
        None => true,
    }
}

/// With a letter set, at least two of the first `window` tokens must exist
/// and all of them must start with that letter (case-insensitive).
pub fn has_alliteration(candidate: &str, letter: Option<char>, window: usize) -> bool {
    let Some(letter) = letter else {
        return true;
    };
    let target = letter.to_lowercase().next().unwrap_or(letter);
    let starters: Vec<char> = tokenize(candidate)
        .iter()
        .take(window)
        .filter_map(|t| t.chars().next())
        .collect();
    starters.len() >= 2 && starters.iter().all(|&c| c == target)
}

/// The last normalized token ends with `tail` (lowercased, one leading
/// hyphen stripped). An empty tail always passes.
pub fn rhymes_with(candidate: &str, tail: &str) -> bool {
    if tail.is_empty() {
        return true;
    }
    let tail = tail.to_lowercase();
    let tail = tail.strip_prefix('-').unwrap_or(&tail);
    let tokens = tokenize(candidate);
    tokens.last().map(String::as_str).unwrap_or("").ends_with(tail)
}

/// Every phrase, normalized, is a substring of the normalized candidate.
pub fn includes_all(candidate: &str, phrases: &[String]) -> bool {
    let text = normalize(candidate);
    phrases.iter().all(|p| text.contains(&normalize(p)))
}

/// No phrase, normalized, is a substring of the normalized candidate.
pub fn avoids_all(candidate: &str, phrases: &[String]) -> bool {
    let text = normalize(candidate);
    phrases.iter().all(|p| !text.contains(&normalize(p)))
}

/// The full predicate set for one generation request.
#[derive(Debug, Clone)]
pub struct Constraints<'a> {
    pub length: LengthPref,
    pub alliteration: Option<char>,
    pub alliteration_window: usize,
    pub rhyme_tail: &'a str,
    pub must_include: &'a [String],
    pub avoid: &'a [String],
}

impl<'a> Constraints<'a> {
    pub fn from_options(opts: &'a GenerationOptions, config: &GeneratorConfig) -> Self {
        Constraints {
            length: opts.length,
            alliteration: opts.alliteration,
            alliteration_window: config.alliteration_window,
            rhyme_tail: &opts.rhyme_tail,
            must_include: &opts.must_include,
            avoid: &opts.avoid,
        }
    }

    /// True if `candidate` satisfies every predicate.
    pub fn accepts(&self, candidate: &str) -> bool {
        meets_length(candidate, self.length)
            && has_alliteration(candidate, self.alliteration, self.alliteration_window)
            && rhymes_with(candidate, self.rhyme_tail)
            && includes_all(candidate, self.must_include)
            && avoids_all(candidate, self.avoid)
    }
}
