//! Error types for the word ladder workspace.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid vertex: {0}")]
    InvalidVertex(String),

    #[error("Unknown word: {0}")]
    UnknownWord(String),

    #[error("Shortest paths have not been precomputed")]
    MissingPrecomputation,

    #[error("Shortest paths are stale: graph at revision {graph}, index built at revision {index}")]
    StalePrecomputation { graph: u64, index: u64 },

    #[error("Ingest error: {0}")]
    Ingest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
