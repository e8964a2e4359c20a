// Generation orchestrator: raw candidates in, ranked branded results out.
//
// Pipeline for one request:
//
// 1. Draw `candidate_attempts` raw candidates. Each comes from the Markov
//    sampler with `markov_probability` (word cap 12 for long requests, 8
//    otherwise) or from the template combiner. Whitespace is collapsed, and
//    a candidate ending in a word character gets a `!` with
//    `exclamation_probability`.
// 2. Deduplicate by exact text, keeping first occurrences in order and
//    dropping empty strings. An empty Markov walk is never offered as a
//    slogan, even when no length bound would reject it.
// 3. Keep candidates that pass every constraint and score them.
// 4. Sort by score, descending and stable. Keep the top
//    `max(count * 2, count + 8)`.
// 5. Brand each survivor, then truncate to `count`.
//
// The chain is passed in so `Session` can reuse a cached one;
// `generate_from_corpus` builds it fresh.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use slogan_lexicon::text::{collapse_whitespace, ends_with_word_char};
use slogan_lexicon::{Corpus, WordBank};
use slogan_prng::RandomSource;

use crate::brand::inject_brand;
use crate::config::GeneratorConfig;
use crate::constraints::Constraints;
use crate::markov::{MarkovChain, chain_for_industry};
use crate::options::{GenerationOptions, LengthPref};
use crate::scoring::score_candidate;
use crate::template::{TemplateRequest, combine_template};

/// A scored slogan. Before branding `text` is the raw candidate; in the
/// final result list it is the branded, presentation-ready text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub score: f64,
}

/// Run the full pipeline against a prebuilt chain.
pub fn generate_slogans<R: RandomSource>(
    bank: &WordBank,
    chain: &MarkovChain,
    opts: &GenerationOptions,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Candidate> {
    let raw = draw_raw_candidates(bank, chain, opts, config, rng);
    let unique = dedup_candidates(raw);
    let scored = filter_and_score(unique, bank, opts, config);
    let results = rank_and_brand(scored, opts, config, rng);
    tracing::info!(
        industry = %opts.industry_id,
        results = results.len(),
        requested = opts.count,
        "generation finished"
    );
    results
}

/// Build the industry-scoped chain from `corpus`, then run the pipeline.
pub fn generate_from_corpus<R: RandomSource>(
    bank: &WordBank,
    corpus: &Corpus,
    opts: &GenerationOptions,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Candidate> {
    let chain = chain_for_industry(corpus, &opts.industry_id, config.min_scoped_rows);
    generate_slogans(bank, &chain, opts, config, rng)
}

/// Step 1: draw raw candidates from both strategies.
pub fn draw_raw_candidates<R: RandomSource>(
    bank: &WordBank,
    chain: &MarkovChain,
    opts: &GenerationOptions,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<String> {
    let max_words = if opts.length == LengthPref::Long {
        config.markov_max_words_long
    } else {
        config.markov_max_words
    };
    let request = TemplateRequest {
        industry_id: &opts.industry_id,
        description: &opts.description,
        tones: &opts.tones,
        length: opts.length,
    };

    let mut out = Vec::with_capacity(config.candidate_attempts);
    for _ in 0..config.candidate_attempts {
        let raw = if rng.chance(config.markov_probability) {
            chain.sample(max_words, config.markov_step_slack, rng)
        } else {
            combine_template(bank, &request, config, rng)
        };
        let mut candidate = collapse_whitespace(&raw);
        if ends_with_word_char(&candidate) && rng.chance(config.exclamation_probability) {
            candidate.push('!');
        }
        out.push(candidate);
    }
    tracing::debug!(drawn = out.len(), "raw candidates drawn");
    out
}

/// Step 2: exact-text dedup, first occurrence wins, empties dropped.
pub fn dedup_candidates(raw: Vec<String>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let unique: Vec<String> = raw
        .into_iter()
        .filter(|c| !c.is_empty() && seen.insert(c.clone()))
        .collect();
    tracing::debug!(unique = unique.len(), "candidates deduplicated");
    unique
}

/// Step 3: apply the constraint filter and score the survivors.
pub fn filter_and_score(
    candidates: Vec<String>,
    bank: &WordBank,
    opts: &GenerationOptions,
    config: &GeneratorConfig,
) -> Vec<Candidate> {
    let constraints = Constraints::from_options(opts, config);
    let scored: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| constraints.accepts(c))
        .map(|text| {
            let score = score_candidate(&text, bank, &opts.industry_id, &opts.rhyme_tail, &config.scoring);
            Candidate { text, score }
        })
        .collect();
    tracing::debug!(passed = scored.len(), "candidates passed constraints");
    scored
}

/// Steps 4 and 5: rank, over-fetch, brand, truncate.
pub fn rank_and_brand<R: RandomSource>(
    mut scored: Vec<Candidate>,
    opts: &GenerationOptions,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Candidate> {
    let count = opts.clamped_count(config.max_count);
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(overfetch_limit(count));
    let mut branded: Vec<Candidate> = scored
        .into_iter()
        .map(|c| Candidate {
            text: inject_brand(&c.text, &opts.brand, config.brand_prefix_probability, rng),
            score: c.score,
        })
        .collect();
    branded.truncate(count);
    branded
}

/// How many ranked candidates survive to the branding step.
pub fn overfetch_limit(count: usize) -> usize {
    (count * 2).max(count + 8)
}
