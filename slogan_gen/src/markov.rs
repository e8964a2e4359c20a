// First-order Markov chain over slogan words.
//
// Built from the example corpus: each slogan is tokenized, wrapped in
// `Start`/`End` sentinels, and every consecutive token pair increments a
// transition count. Sampling walks from `Start`, drawing each successor with
// probability proportional to its count (cumulative scan over a single
// uniform draw), and stops at `End`, at a token with no successors, or at the
// step cap.
//
// Chains are scoped to an industry: rows tagged with the requested id or
// `generic` are used, unless fewer than `min_scoped_rows` match, in which
// case the whole corpus is used so the walk has enough variety.
//
// Transition tables are `BTreeMap`s so iteration order (and therefore the
// output for a given seed) is stable across runs.

use std::collections::BTreeMap;

use slogan_lexicon::Corpus;
use slogan_lexicon::text::tokenize;
use slogan_prng::RandomSource;

/// A chain state: a word or one of the two sentinels.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Start,
    Word(String),
    End,
}

/// Successor counts out of one token.
pub type TransitionTable = BTreeMap<Token, u32>;

/// First-order transition counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkovChain {
    transitions: BTreeMap<Token, TransitionTable>,
}

impl MarkovChain {
    /// Build a chain from raw slogan strings.
    ///
    /// An empty slogan still records a `Start -> End` transition.
    pub fn build<'a, I>(slogans: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut transitions: BTreeMap<Token, TransitionTable> = BTreeMap::new();
        for slogan in slogans {
            let mut prev = Token::Start;
            let words = tokenize(slogan).into_iter().map(Token::Word);
            for next in words.chain(std::iter::once(Token::End)) {
                *transitions
                    .entry(prev)
                    .or_default()
                    .entry(next.clone())
                    .or_insert(0) += 1;
                prev = next;
            }
        }
        MarkovChain { transitions }
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Number of tokens with at least one outgoing transition.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Outgoing transitions from `token`, if any.
    pub fn successors(&self, token: &Token) -> Option<&TransitionTable> {
        self.transitions.get(token)
    }

    /// Recorded count for a single transition (0 if never seen).
    pub fn count(&self, from: &Token, to: &Token) -> u32 {
        self.successors(from)
            .and_then(|t| t.get(to))
            .copied()
            .unwrap_or(0)
    }

    /// Walk the chain from `Start` and return the emitted words joined by
    /// single spaces.
    ///
    /// At most `max_words + step_slack` steps are taken. May return an empty
    /// string (empty chain, or `End` drawn immediately).
    pub fn sample<R: RandomSource>(&self, max_words: usize, step_slack: usize, rng: &mut R) -> String {
        let start = Token::Start;
        let mut out: Vec<&str> = Vec::new();
        let mut current = &start;
        for _ in 0..max_words + step_slack {
            let Some(table) = self.transitions.get(current) else {
                break;
            };
            let Some(next) = sample_from_table(table, rng.next_f64()) else {
                break;
            };
            match next {
                Token::Word(word) => out.push(word.as_str()),
                Token::End | Token::Start => break,
            }
            current = next;
        }
        out.join(" ")
    }
}

/// Build the chain for `industry_id`, widening to the whole corpus when the
/// industry+generic scope has fewer than `min_scoped_rows` rows.
pub fn chain_for_industry(corpus: &Corpus, industry_id: &str, min_scoped_rows: usize) -> MarkovChain {
    let scoped = corpus.scoped_slogans(industry_id);
    if scoped.len() < min_scoped_rows {
        tracing::debug!(
            industry = industry_id,
            scoped = scoped.len(),
            total = corpus.len(),
            "too few scoped corpus rows, using full corpus"
        );
        return MarkovChain::build(corpus.all_slogans());
    }
    let chain = MarkovChain::build(scoped);
    tracing::debug!(industry = industry_id, states = chain.len(), "markov chain built");
    chain
}

/// Caches the most recently built chain, keyed by industry id and corpus
/// length. The corpus is append-only, so an unchanged length means unchanged
/// rows.
#[derive(Debug, Default)]
pub struct ChainCache {
    entry: Option<(String, usize, MarkovChain)>,
}

impl ChainCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached chain for `industry_id`, rebuilding it if the
    /// industry or the corpus length changed.
    pub fn get_or_build(&mut self, corpus: &Corpus, industry_id: &str, min_scoped_rows: usize) -> &MarkovChain {
        let fresh = matches!(
            &self.entry,
            Some((id, len, _)) if id == industry_id && *len == corpus.len()
        );
        if fresh {
            tracing::debug!(industry = industry_id, "markov chain cache hit");
        } else {
            self.entry = None;
        }
        let (_, _, chain) = self.entry.get_or_insert_with(|| {
            let chain = chain_for_industry(corpus, industry_id, min_scoped_rows);
            (industry_id.to_string(), corpus.len(), chain)
        });
        chain
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

/// Weighted choice over a transition table using a value in [0, 1).
fn sample_from_table(table: &TransitionTable, rng_val: f64) -> Option<&Token> {
    let total: u64 = table.values().map(|&c| u64::from(c)).sum();
    if total == 0 {
        return None;
    }
    let target = rng_val * total as f64;
    let mut cumulative = 0u64;
    for (token, &count) in table {
        cumulative += u64::from(count);
        if cumulative as f64 > target {
            return Some(token);
        }
    }
    table.keys().next_back()
}
