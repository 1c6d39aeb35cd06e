//! Error types shared by the pattern engine and the mint registry

use thiserror::Error;

use crate::registry::TokenId;

/// Error type for registry queries, seed validation and data URI decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PenroseError {
    /// Query for a token id that was never minted
    #[error("token {0} not found")]
    NotFound(TokenId),
    /// Seed is not an integer in the supported domain
    #[error("invalid seed '{0}': expected a decimal integer with magnitude at most 2^57")]
    InvalidSeed(String),
    /// Input is not a `data:image/svg+xml;base64,` URI holding UTF-8 markup
    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PenroseError>;
