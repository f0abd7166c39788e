//! Error types for link-rank

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The link graph breaks one of its invariants: empty, duplicated page,
    /// self-loop, or a link to a page outside the corpus.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Sampling error: {0}")]
    Sampling(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "damping={damping}, expected a value in (0, 1)"
        )))
    }
}
