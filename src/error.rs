//! Error types for expression reduction.
//!
//! Every failure aborts the whole call: there are no partial results.
//! A term whose factors contradict each other (`A*A'`) is *not* an error,
//! it is simply dropped by the reducer.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The lexer met a character that is neither an operator nor a variable.
    #[error("Invalid character ({character:?}) at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The parser met an unexpected token (or ran out of tokens).
    #[error("Malformed expression: expected {expected} found {found}")]
    MalformedExpression { expected: String, found: String },

    /// A DNF term could not be read back as a product of factors.
    #[error("Malformed implicant ({term})")]
    MalformedImplicant { term: String },
}

impl Error {
    pub(crate) fn malformed_expression(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Error::MalformedExpression {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub(crate) fn malformed_implicant(term: impl Into<String>) -> Self {
        Error::MalformedImplicant { term: term.into() }
    }
}
