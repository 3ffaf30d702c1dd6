// Boundary error type.
//
// The engine itself is total over a validated buffer; every error is
// detected before the rule cascade starts.

/// Errors reported at the stemming boundary.
#[derive(Debug, thiserror::Error)]
pub enum StemError {
    /// The word exceeds the caller-enforced maximum buffer size.
    #[error("word is {length} characters long, limit is {max}")]
    InputTooLong { length: usize, max: usize },

    /// The input bytes are not a well-formed UTF-8 sequence.
    #[error("input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),
}
