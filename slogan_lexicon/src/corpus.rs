// Example-slogan corpus used to train the Markov chain.
//
// The corpus file is a two-column CSV with a `slogan,industry` header. Each
// data row is split at its first comma: the left side is the slogan (one
// layer of surrounding double quotes stripped), the right side is the
// industry id, trimmed, defaulting to `generic`. Parsing never fails: a row
// with nothing before the comma yields an empty slogan instead of being
// dropped, so the row count reported after an import always matches the
// number of data lines in the file.
//
// The corpus is append-only. User imports are concatenated onto the loaded
// rows for the rest of the session; nothing is ever removed.

use std::path::Path;

use crate::error::LexiconError;
use crate::types::GENERIC_INDUSTRY;

/// One example slogan tagged with an industry id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRow {
    pub slogan: String,
    pub industry: String,
}

/// An append-only sequence of corpus rows.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    rows: Vec<CorpusRow>,
}

impl Corpus {
    pub fn new(rows: Vec<CorpusRow>) -> Self {
        Corpus { rows }
    }

    /// Parse a corpus from CSV text (header row skipped).
    pub fn from_csv(text: &str) -> Self {
        Corpus::new(parse_corpus_csv(text))
    }

    /// Read and parse a corpus CSV file.
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        Ok(Corpus::from_csv(&read_file(path)?))
    }

    pub fn rows(&self) -> &[CorpusRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append rows to the end of the corpus. Returns how many were added.
    pub fn append(&mut self, rows: Vec<CorpusRow>) -> usize {
        let added = rows.len();
        self.rows.extend(rows);
        tracing::debug!(added, total = self.rows.len(), "corpus rows appended");
        added
    }

    /// Slogans tagged with `industry_id` or `generic`, in corpus order.
    pub fn scoped_slogans(&self, industry_id: &str) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| r.industry == industry_id || r.industry == GENERIC_INDUSTRY)
            .map(|r| r.slogan.as_str())
            .collect()
    }

    /// Every slogan in corpus order.
    pub fn all_slogans(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.slogan.as_str()).collect()
    }
}

/// Parse corpus CSV text into rows.
///
/// Lines are trimmed and blank lines skipped; the first remaining line is the
/// header and is discarded.
pub fn parse_corpus_csv(text: &str) -> Vec<CorpusRow> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .skip(1)
        .map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> CorpusRow {
    // The industry column only exists if something follows the first comma.
    let (slogan, industry) = match line.split_once(',') {
        Some((s, rest)) if !rest.is_empty() => (s, rest.trim()),
        _ => (line, ""),
    };
    let slogan = slogan.strip_prefix('"').unwrap_or(slogan);
    let slogan = slogan.strip_suffix('"').unwrap_or(slogan);
    let industry = if industry.is_empty() {
        GENERIC_INDUSTRY
    } else {
        industry
    };
    CorpusRow {
        slogan: slogan.to_string(),
        industry: industry.to_string(),
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, LexiconError> {
    std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}
