use std::num::ParseIntError;

use thiserror::Error;

/// Errors surfaced by the solvers and the input plumbing around them.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The input is well-formed text but violates a problem's preconditions
    /// (unsorted days, an empty grid, a truncated input stream, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid integer literal {token:?}")]
    Parse {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
