//! The bcrypt cost function, behind an injectable trait.

use zeroize::Zeroizing;

use super::salt::Salt;
use super::version::BcryptVersion;
use super::{MAX_COST, MIN_COST};
use crate::error::CryptoError;

/// The expensive Eksblowfish computation.
///
/// Given a password and a canonical (`$2a$` or `$2b$`) 29-character salt,
/// returns the full 60-character hash string under that same tag.
/// Implementations report every failure as
/// `CryptoError::HashComputationFailed`.
pub trait CostFunction: Send + Sync {
    /// Compute the raw hash string for `password` under `normalized_salt`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::HashComputationFailed` on any failure.
    fn cost_hash(&self, password: &[u8], normalized_salt: &str) -> Result<String, CryptoError>;
}

impl<C: CostFunction + ?Sized> CostFunction for &C {
    fn cost_hash(&self, password: &[u8], normalized_salt: &str) -> Result<String, CryptoError> {
        (**self).cost_hash(password, normalized_salt)
    }
}

/// Cost function backed by the `bcrypt` crate.
///
/// Accepts costs in [`MIN_COST`]..=[`MAX_COST`]. Passwords longer than 72
/// bytes are truncated, as every bcrypt implementation does.
#[derive(Clone, Copy, Debug, Default)]
pub struct BcryptBackend;

impl CostFunction for BcryptBackend {
    fn cost_hash(&self, password: &[u8], normalized_salt: &str) -> Result<String, CryptoError> {
        let salt = Salt::parse(normalized_salt)
            .map_err(|e| CryptoError::HashComputationFailed(e.to_string()))?;

        let version = match salt.version() {
            BcryptVersion::LegacyA => ::bcrypt::Version::TwoA,
            BcryptVersion::Latest => ::bcrypt::Version::TwoB,
            BcryptVersion::CryptBlowfish => {
                return Err(CryptoError::HashComputationFailed(
                    "cost function only accepts $2a$ and $2b$ salts".into(),
                ));
            }
        };

        let cost = salt.cost();
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(CryptoError::HashComputationFailed(format!(
                "cost {cost} outside supported range {MIN_COST}..={MAX_COST}"
            )));
        }

        let raw = Zeroizing::new(
            salt.raw_bytes()
                .map_err(|e| CryptoError::HashComputationFailed(e.to_string()))?,
        );
        let parts = ::bcrypt::hash_with_salt(password, cost, *raw).map_err(|e| {
            tracing::warn!(cost, "bcrypt backend rejected input: {e}");
            CryptoError::HashComputationFailed(format!("bcrypt failed: {e}"))
        })?;

        Ok(parts.format_for_version(version))
    }
}
