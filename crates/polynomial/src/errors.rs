//! Error types for polynomial decoding.

use thiserror::Error;

/// Errors that can occur while reading a polynomial from text.
///
/// Arithmetic itself is total and has no error path.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// A token of the input line is not a valid floating point number
    #[error("bad coefficient: {0}")]
    BadCoefficient(String),

    /// The input stream is exhausted
    #[error("end of input")]
    EndOfInput,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
