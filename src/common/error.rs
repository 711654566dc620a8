//! Error types for bidindex.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Saves writing `Result<T, Error>` at every fallible call site, the same
/// shorthand `std::io::Result` provides for I/O code.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in bidindex.
///
/// A "bid not found" outcome is deliberately *not* an error: searches return
/// `Option` and removals of absent ids are no-ops. The variants here are the
/// conditions a caller must handle differently from an empty result.
#[derive(Debug, Error)]
pub enum Error {
    /// The CSV source could not be opened or parsed.
    ///
    /// This wraps `csv::Error` from the loader, which itself covers the
    /// underlying I/O failures.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A bid id presented to the hashed index did not parse as a
    /// non-negative integer.
    ///
    /// The hashed index buckets by numeric id; a non-numeric id indicates a
    /// precondition violation by the caller, not an absent record, so it is
    /// surfaced distinctly instead of being coerced to some arbitrary bucket.
    #[error("invalid bid id {0:?}: expected a non-negative integer")]
    InvalidKey(String),
}
