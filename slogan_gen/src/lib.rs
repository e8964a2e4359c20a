// Slogan generator: Markov chain + template candidates, constraint filter,
// heuristic scoring and brand injection.
//
// A request (`GenerationOptions`) is turned into a ranked list of slogans:
// a batch of raw candidates is drawn from two strategies (a first-order
// word Markov chain trained on example slogans, and word-bank templates),
// deduplicated, filtered against the user's constraints, scored, sorted,
// and finally decorated with the brand name.
//
// Architecture:
// - `markov.rs`: chain construction, industry scoping, weighted sampling,
//   the per-session chain cache
// - `template.rs`: template combiner (sentence shapes over word-bank slots)
// - `constraints.rs`: length, alliteration, rhyme, must-include and avoid
// - `scoring.rs`: punch score and its tunable `ScoringWeights`
// - `brand.rs`: brand prefix/suffix decoration
// - `generate.rs`: the orchestrator tying the above together
// - `options.rs`: request options and form/CLI input parsing helpers
// - `config.rs`: `GeneratorConfig`, every probability and numeric knob
// - `results.rs`: result list with search and sort views
// - `export.rs`: CSV export and re-import of results
// - `surprise.rs`: randomized preset requests
// - `session.rs`: vocabulary + corpus + results for a run of requests
//
// Every random decision flows through `slogan_prng::RandomSource`, so a
// seeded `SloganRng` reproduces a run exactly and a `ScriptedRng` can steer
// individual branches in tests.

pub mod brand;
pub mod config;
pub mod constraints;
pub mod export;
pub mod generate;
pub mod markov;
pub mod options;
pub mod results;
pub mod scoring;
pub mod session;
pub mod surprise;
pub mod template;

pub use config::GeneratorConfig;
pub use generate::{Candidate, generate_from_corpus, generate_slogans};
pub use options::{GenerationOptions, LengthPref};
pub use results::{ResultSet, SortMode};
pub use session::Session;
