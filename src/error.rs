use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BayesError {
    /// Dataset or model file is missing or cannot be opened.
    #[error("could not open {}: {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Dataset or model file exists but its content is malformed.
    #[error("failed to parse {}{}: {reason}", path.display(), line.map(|l| format!(" (line {l})")).unwrap_or_default())]
    Parse {
        path: PathBuf,
        line: Option<usize>,
        reason: String,
    },

    /// Training or evaluation was handed zero rows.
    #[error("dataset contains no instances")]
    EmptyDataset,

    /// Classifier and dataset (or instance) disagree on classes or attributes.
    #[error("classifier does not match the data: {0}")]
    VocabularyMismatch(String),

    /// A classification request has the wrong number of attribute values.
    #[error("malformed case: expected {expected} attribute values, got {got}")]
    MalformedCase { expected: usize, got: usize },

    /// A session operation ran before its inputs were loaded.
    #[error("no {0} loaded")]
    NothingLoaded(&'static str),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("model serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BayesError {
    pub(crate) fn mismatch(reason: impl Into<String>) -> Self {
        BayesError::VocabularyMismatch(reason.into())
    }

    /// Maps an open/read failure on `path` to the loader taxonomy.
    pub(crate) fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                BayesError::SourceNotFound { path, source: err }
            }
            _ => BayesError::Parse {
                path,
                line: None,
                reason: err.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, BayesError>;
