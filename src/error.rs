//! Error types shared by the k-mer and TSS pipelines.

use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, KmerTssError>;

#[derive(Error, Debug)]
pub enum KmerTssError {
    /// A run parameter is outside its valid range.
    #[error("invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },

    /// A reference (chromosome, position) line could not be parsed.
    /// The whole index build is abandoned.
    #[error("malformed reference line {line}: {reason}")]
    ReferenceParse { line: usize, reason: String },

    /// An interval line is unusable; annotation aborts without output.
    #[error("malformed interval line {line}: {reason}")]
    IntervalParse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
