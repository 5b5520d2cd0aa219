//! Serializable parameter sets for BCrypt and PBKDF2.
//!
//! These are meant to be stored next to the hashes or keys they produced,
//! so a later verification or re-derivation uses the same settings.

use serde::{Deserialize, Serialize};

use crate::bcrypt::{BcryptVersion, DEFAULT_COST, MAX_COST, MIN_COST};
use crate::error::CryptoError;
use crate::hash::{HashAlgorithm, MessageDigest};

// ---------------------------------------------------------------------------
// BCrypt
// ---------------------------------------------------------------------------

/// BCrypt work factor and output tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BcryptParams {
    /// Work factor; each increment doubles the cost.
    pub cost: u32,
    /// Tag written on new hashes.
    pub version: BcryptVersion,
}

impl Default for BcryptParams {
    fn default() -> Self {
        Self {
            cost: DEFAULT_COST,
            version: BcryptVersion::Latest,
        }
    }
}

impl BcryptParams {
    /// Check the cost against the range the bcrypt backend supports.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidParameters` if `cost` is outside
    /// `MIN_COST..=MAX_COST`.
    pub fn validate(&self) -> Result<(), CryptoError> {
        if (MIN_COST..=MAX_COST).contains(&self.cost) {
            Ok(())
        } else {
            Err(CryptoError::InvalidParameters(format!(
                "bcrypt cost must be between {MIN_COST} and {MAX_COST}, got {}",
                self.cost
            )))
        }
    }
}

// ---------------------------------------------------------------------------
// PBKDF2
// ---------------------------------------------------------------------------

/// PBKDF2 preset selector.
///
/// Iteration counts follow the OWASP password storage recommendations for
/// each digest family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pbkdf2Preset {
    /// HMAC-SHA1, for interoperability with older stores.
    Legacy,
    /// HMAC-SHA256, the recommended default.
    Standard,
    /// HMAC-SHA512 with a 64-byte output.
    Strong,
}

impl Pbkdf2Preset {
    /// Parameters for this preset.
    #[must_use]
    pub const fn params(self) -> Pbkdf2Params {
        match self {
            Self::Legacy => Pbkdf2Params {
                algorithm: HashAlgorithm::Sha1,
                iterations: 1_300_000,
                key_size: None,
            },
            Self::Standard => Pbkdf2Params {
                algorithm: HashAlgorithm::Sha256,
                iterations: 600_000,
                key_size: None,
            },
            Self::Strong => Pbkdf2Params {
                algorithm: HashAlgorithm::Sha512,
                iterations: 210_000,
                key_size: None,
            },
        }
    }
}

/// PBKDF2 digest, iteration count and output length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pbkdf2Params {
    /// Digest family for the HMAC PRF.
    pub algorithm: HashAlgorithm,
    /// Number of PRF applications per block.
    pub iterations: u32,
    /// Output length in bytes; `None` means the digest output size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_size: Option<usize>,
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Pbkdf2Preset::Standard.params()
    }
}

impl Pbkdf2Params {
    /// Output length these parameters produce.
    #[must_use]
    pub fn resolved_key_size(&self) -> usize {
        self.key_size.unwrap_or_else(|| self.algorithm.output_size())
    }

    /// Check the parameters without deriving anything.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidParameters` if `iterations` is zero or
    /// the key size is zero.
    pub fn validate(&self) -> Result<(), CryptoError> {
        if self.iterations == 0 {
            return Err(CryptoError::InvalidParameters(
                "PBKDF2 iterations must be at least 1".into(),
            ));
        }
        if self.resolved_key_size() == 0 {
            return Err(CryptoError::InvalidParameters(
                "PBKDF2 key size must be at least 1 byte".into(),
            ));
        }
        Ok(())
    }
}
