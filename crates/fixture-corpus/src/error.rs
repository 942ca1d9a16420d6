//! # Fixture Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    /// An index fell outside the declared extent.
    #[error("Index {index} out of range (extent {extent})")]
    OutOfRange { index: usize, extent: usize },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
