//! Error types for `passkdf-core`.

use thiserror::Error;

/// Errors produced by password hashing and key derivation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Salt text is malformed or carries an unknown version tag.
    #[error("invalid salt: {0}")]
    InvalidSalt(String),

    /// Hash string has an unknown version tag or wrong segment lengths.
    #[error("invalid hash format: {0}")]
    InvalidHashFormat(String),

    /// The bcrypt cost function reported a failure.
    #[error("hash computation failed: {0}")]
    HashComputationFailed(String),

    /// PBKDF2 was asked for zero iterations.
    #[error("iteration count must be at least 1")]
    NoIterations,

    /// PBKDF2 was given an empty password.
    #[error("password must not be empty")]
    EmptyPassword,

    /// PBKDF2 was given an empty salt.
    #[error("salt must not be empty")]
    EmptySalt,

    /// Requested PBKDF2 output exceeds what the construction can produce.
    #[error("requested key size {requested} exceeds maximum {max}")]
    KeySizeTooLarge {
        /// Requested output length in bytes.
        requested: usize,
        /// Largest output length the digest permits.
        max: u64,
    },

    /// The OS entropy source failed to produce bytes.
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// A parameter set failed validation.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}
