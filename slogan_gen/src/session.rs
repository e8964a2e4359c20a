// A generation session: loaded vocabulary, growing corpus, latest results.
//
// A `Session` can only be built from a validated `WordBank`, so every
// request runs against a fully loaded vocabulary. The corpus only grows
// (user imports are appended), and the Markov chain for the last requested
// industry is cached until the corpus length or the industry changes.

use std::path::Path;

use slogan_lexicon::{Corpus, LexiconError, WordBank, parse_corpus_csv};
use slogan_prng::RandomSource;

use crate::config::GeneratorConfig;
use crate::export::export_csv;
use crate::generate::{Candidate, generate_slogans};
use crate::markov::ChainCache;
use crate::options::GenerationOptions;
use crate::results::{ResultSet, SortMode};

#[derive(Debug)]
pub struct Session {
    word_bank: WordBank,
    corpus: Corpus,
    config: GeneratorConfig,
    results: ResultSet,
    chain_cache: ChainCache,
}

impl Session {
    pub fn new(word_bank: WordBank, corpus: Corpus, config: GeneratorConfig) -> Self {
        Session {
            word_bank,
            corpus,
            config,
            results: ResultSet::new(),
            chain_cache: ChainCache::new(),
        }
    }

    pub fn word_bank(&self) -> &WordBank {
        &self.word_bank
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Run one generation request. Replaces the previous results (live list
    /// and original-order snapshot) and returns the new ones.
    pub fn generate<R: RandomSource>(&mut self, opts: &GenerationOptions, rng: &mut R) -> &[Candidate] {
        let chain = self
            .chain_cache
            .get_or_build(&self.corpus, &opts.industry_id, self.config.min_scoped_rows);
        let results = generate_slogans(&self.word_bank, chain, opts, &self.config, rng);
        self.results.replace(results);
        self.results.live()
    }

    /// Append a user corpus in `slogan,industry` CSV form (header skipped).
    /// Returns the number of rows loaded.
    pub fn import_corpus(&mut self, csv: &str) -> usize {
        let added = self.corpus.append(parse_corpus_csv(csv));
        tracing::info!(added, total = self.corpus.len(), "corpus imported");
        added
    }

    /// Read a corpus CSV file and append it.
    pub fn import_corpus_file(&mut self, path: &Path) -> Result<usize, LexiconError> {
        let imported = Corpus::from_file(path)?;
        let added = self.corpus.append(imported.rows().to_vec());
        tracing::info!(added, total = self.corpus.len(), path = %path.display(), "corpus file imported");
        Ok(added)
    }

    /// Drop the current results.
    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Filtered, sorted view of the current results.
    pub fn view(&self, search: &str, sort: SortMode) -> Vec<&Candidate> {
        self.results.view(search, sort)
    }

    /// CSV export of the full ranked result list, `None` when it is empty.
    /// Search and sort only shape `view`; they never narrow an export.
    pub fn export(&self) -> Option<String> {
        export_csv(self.results.live())
    }
}
