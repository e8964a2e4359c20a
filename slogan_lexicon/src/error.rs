// Load-time errors for word banks and corpus files.
//
// Only loading can fail. Once a `WordBank` exists it has been validated, and
// corpus parsing itself is total (malformed rows degrade to empty fields), so
// the only corpus error is failing to read the file.

use std::path::PathBuf;

/// Errors raised while loading or validating lexicon data.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("malformed word bank JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word bank defines no industries")]
    NoIndustries,

    #[error("industry id `{0}` is defined more than once")]
    DuplicateIndustry(String),

    /// A word list the template combiner draws from is empty.
    #[error("word list `{field}` is empty")]
    EmptyList { field: String },
}
