// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed graph file at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Label alphabet must contain at least one label")]
    EmptyAlphabet,

    #[error("Alpha must be a finite value >= 0, got {0}")]
    InvalidAlpha(f64),

    #[error("Edge probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error(
        "Alpha-proximity is unattainable: the graph is complete and still \
         fails the predicate ({edges_added} edges were added)"
    )]
    Unattainable { edges_added: usize },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;

// Allow `?` on std::io::Error by converting to GraphError::Io with unknown path.
impl From<std::io::Error> for GraphError {
    fn from(source: std::io::Error) -> Self {
        GraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
