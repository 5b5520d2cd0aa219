//! BCrypt password hashing and verification.
//!
//! This module provides:
//! - [`PasswordHasher`]: hash / hash-with-salt / verify over injectable collaborators
//! - [`BcryptVersion`]: `$2a$`, `$2y$`, `$2b$` tags with fixed field widths
//! - [`Salt`]: the 29-character salt segment
//! - [`PasswordHash`]: a 60-character hash split into salt and checksum
//! - [`CostFunction`] / [`BcryptBackend`]: the expensive Eksblowfish step
//!
//! # Version normalization
//!
//! `$2y$` and `$2b$` compute identically. The cost function only accepts the
//! canonical tag, so a `$2y$` salt is hashed as `$2b$` and the caller's tag
//! is put back on the result.

mod backend;
mod format;
mod salt;
mod version;

pub use backend::{BcryptBackend, CostFunction};
pub use format::PasswordHash;
pub use salt::{Salt, ENCODED_SALT_LEN, MAX_RENDERED_COST, SALT_BYTES};
pub use version::{BcryptVersion, FieldWidths, CHECKSUM_COUNT, HASH_LEN, SALT_COUNT, TAG_LEN};

use subtle::ConstantTimeEq;

use crate::config::BcryptParams;
use crate::error::CryptoError;
use crate::random::{OsRandom, SecureRandom};

/// Default work factor.
pub const DEFAULT_COST: u32 = 12;

/// Smallest cost accepted by [`BcryptBackend`].
pub const MIN_COST: u32 = 4;

/// Largest cost accepted by [`BcryptBackend`].
pub const MAX_COST: u32 = 31;

/// BCrypt hasher with an injected cost function and random source.
///
/// Holds no per-call state; one instance can serve concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct PasswordHasher<C = BcryptBackend, R = OsRandom> {
    cost_function: C,
    rng: R,
}

impl PasswordHasher {
    /// Hasher backed by the `bcrypt` crate and the OS CSPRNG.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cost_function: BcryptBackend,
            rng: OsRandom,
        }
    }
}

impl<C: CostFunction, R: SecureRandom> PasswordHasher<C, R> {
    /// Hasher over explicit collaborators.
    pub const fn with_parts(cost_function: C, rng: R) -> Self {
        Self { cost_function, rng }
    }

    /// Hash `plaintext` under a fresh `$2b$` salt with the given cost.
    ///
    /// # Errors
    ///
    /// - `CryptoError::RandomSource` if salt generation fails
    /// - `CryptoError::HashComputationFailed` if the cost function fails or
    ///   `cost` cannot be rendered in two digits
    pub fn hash(&self, plaintext: &[u8], cost: u32) -> Result<String, CryptoError> {
        self.hash_as(plaintext, BcryptVersion::Latest, cost)
    }

    /// Hash `plaintext` using a stored parameter set.
    ///
    /// # Errors
    ///
    /// `CryptoError::InvalidParameters` if `params` fails validation,
    /// otherwise as [`PasswordHasher::hash`].
    pub fn hash_with_params(
        &self,
        plaintext: &[u8],
        params: &BcryptParams,
    ) -> Result<String, CryptoError> {
        params.validate()?;
        self.hash_as(plaintext, params.version, params.cost)
    }

    fn hash_as(
        &self,
        plaintext: &[u8],
        version: BcryptVersion,
        cost: u32,
    ) -> Result<String, CryptoError> {
        if cost > MAX_RENDERED_COST {
            return Err(CryptoError::HashComputationFailed(format!(
                "cost {cost} is not supported by the cost function"
            )));
        }
        let salt = Salt::generate(&self.rng, version, cost)?;
        self.hash_with_salt(plaintext, &salt.to_string())
    }

    /// Hash `plaintext` under a caller-supplied 29-character salt.
    ///
    /// The result carries the salt's original tag, even when the
    /// computation ran under the normalized one.
    ///
    /// # Errors
    ///
    /// - `CryptoError::InvalidSalt` if `salt` is malformed or its tag unknown
    /// - `CryptoError::HashComputationFailed` if the cost function fails or
    ///   returns something that is not a hash under the normalized tag
    pub fn hash_with_salt(&self, plaintext: &[u8], salt: &str) -> Result<String, CryptoError> {
        let salt = Salt::parse(salt)?;
        let original = salt.version();
        let normalized = salt.with_version(original.normalized());

        tracing::debug!(version = %original, cost = salt.cost(), "computing bcrypt hash");

        let raw = self
            .cost_function
            .cost_hash(plaintext, &normalized.to_string())?;

        let body = raw
            .strip_prefix(normalized.version().tag())
            .filter(|_| raw.len() == HASH_LEN)
            .ok_or_else(|| {
                tracing::warn!("cost function returned a malformed hash");
                CryptoError::HashComputationFailed(format!(
                    "cost function returned {} characters not tagged {}",
                    raw.len(),
                    normalized.version()
                ))
            })?;

        let mut hash = String::with_capacity(HASH_LEN);
        hash.push_str(original.tag());
        hash.push_str(body);
        Ok(hash)
    }

    /// Check `plaintext` against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; errors are reserved for hashes that
    /// cannot be parsed. Checksums are compared in constant time.
    ///
    /// # Errors
    ///
    /// - `CryptoError::InvalidHashFormat` if the tag is unknown or a segment
    ///   has the wrong width or content
    /// - `CryptoError::HashComputationFailed` if the cost function fails
    pub fn verify(&self, plaintext: &[u8], hash: &str) -> Result<bool, CryptoError> {
        let stored = PasswordHash::parse(hash)?;
        tracing::debug!(version = %stored.version(), "verifying bcrypt hash");

        let recomputed = self
            .hash_with_salt(plaintext, stored.salt())
            .map_err(|e| match e {
                CryptoError::InvalidSalt(reason) => CryptoError::InvalidHashFormat(reason),
                other => other,
            })?;
        let candidate = recomputed
            .len()
            .checked_sub(CHECKSUM_COUNT)
            .and_then(|start| recomputed.get(start..))
            .ok_or_else(|| CryptoError::HashComputationFailed("recomputed hash too short".into()))?;

        Ok(candidate
            .as_bytes()
            .ct_eq(stored.checksum().as_bytes())
            .into())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
