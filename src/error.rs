//! Error types for ecb-rates

use thiserror::Error;

/// Main error type for ecb-rates
#[derive(Error, Debug)]
pub enum EcbError {
    /// Neither the network endpoint nor the configured fallback yielded a
    /// usable byte stream.
    #[error("Rate retrieval failed: {0}")]
    RetrievalFailed(String),

    /// The retrieved payload does not match the daily reference-rate schema.
    /// Covers an empty snapshot sequence and unparseable decimal rate strings.
    #[error("Malformed rate document: {0}")]
    MalformedDocument(String),

    /// The requested symbol is absent from the current snapshot.
    #[error("Symbol not found in current snapshot: {0}")]
    SymbolNotFound(String),
}

/// Result type alias for ecb-rates operations
pub type Result<T> = std::result::Result<T, EcbError>;
