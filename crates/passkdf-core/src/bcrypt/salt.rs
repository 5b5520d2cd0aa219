//! BCrypt salt segment: version tag, 2-digit cost, 22 chars of encoded randomness.

use core::fmt;

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::{DecodePaddingMode, GeneralPurpose};
use base64::Engine;
use zeroize::Zeroizing;

use super::version::{BcryptVersion, SALT_COUNT, TAG_LEN};
use crate::error::CryptoError;
use crate::random::SecureRandom;

/// Raw salt length in bytes.
pub const SALT_BYTES: usize = 16;

/// Encoded salt length in characters.
pub const ENCODED_SALT_LEN: usize = 22;

/// Largest cost that fits the 2-digit cost field.
pub const MAX_RENDERED_COST: u32 = 99;

/// bcrypt's Base64 variant: `./A-Za-z0-9`, unpadded.
///
/// The 22nd character carries 4 unused bits; crypt implementations ignore
/// them, so decoding does too.
pub(crate) const BCRYPT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::BCRYPT,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Offset of the `$` between cost and encoded salt.
const COST_DELIMITER: usize = TAG_LEN + 2;

/// Offset of the first encoded salt character.
const ENCODED_START: usize = COST_DELIMITER + 1;

/// A parsed or freshly generated salt segment.
///
/// Always renders to exactly [`SALT_COUNT`] characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Salt {
    version: BcryptVersion,
    cost: u32,
    encoded: String,
}

impl Salt {
    /// Draw 16 fresh bytes from `rng` and build a salt.
    ///
    /// # Errors
    ///
    /// - `CryptoError::RandomSource` if `rng` fails
    /// - `CryptoError::InvalidSalt` if `cost` does not fit two digits
    pub fn generate<R: SecureRandom + ?Sized>(
        rng: &R,
        version: BcryptVersion,
        cost: u32,
    ) -> Result<Self, CryptoError> {
        let mut raw = Zeroizing::new([0u8; SALT_BYTES]);
        rng.fill_bytes(raw.as_mut_slice())?;
        Self::from_raw(version, cost, &raw)
    }

    /// Build a salt from explicit raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidSalt` if `cost` does not fit two digits.
    pub fn from_raw(
        version: BcryptVersion,
        cost: u32,
        raw: &[u8; SALT_BYTES],
    ) -> Result<Self, CryptoError> {
        if cost > MAX_RENDERED_COST {
            return Err(CryptoError::InvalidSalt(format!(
                "cost {cost} does not fit the 2-digit cost field"
            )));
        }
        Ok(Self {
            version,
            cost,
            encoded: BCRYPT_BASE64.encode(raw),
        })
    }

    /// Parse a 29-character salt segment such as `$2b$12$R9h/cIPz0gi.URNNX3kh2O`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidSalt` if the tag is unknown, the length
    /// is not 29, the cost is not two digits, the delimiter is missing, or
    /// the encoded part is not valid bcrypt Base64.
    pub fn parse(text: &str) -> Result<Self, CryptoError> {
        let version = BcryptVersion::from_prefix(text)
            .ok_or_else(|| CryptoError::InvalidSalt("unrecognized version tag".into()))?;

        if !text.is_ascii() || text.len() != SALT_COUNT {
            return Err(CryptoError::InvalidSalt(format!(
                "expected {SALT_COUNT} ASCII characters, got {}",
                text.chars().count()
            )));
        }

        let bytes = text.as_bytes();
        let cost_digits = &bytes[TAG_LEN..COST_DELIMITER];
        if !cost_digits.iter().all(u8::is_ascii_digit) {
            return Err(CryptoError::InvalidSalt("cost must be two digits".into()));
        }
        let cost = cost_digits.iter().fold(0u32, |acc, d| {
            acc.saturating_mul(10)
                .saturating_add(u32::from(d.saturating_sub(b'0')))
        });

        if bytes[COST_DELIMITER] != b'$' {
            return Err(CryptoError::InvalidSalt("missing '$' after cost".into()));
        }

        let encoded = &text[ENCODED_START..];
        decode_raw(encoded).map_err(CryptoError::InvalidSalt)?;

        Ok(Self {
            version,
            cost,
            encoded: encoded.to_owned(),
        })
    }

    /// Version tag of this salt.
    #[must_use]
    pub const fn version(&self) -> BcryptVersion {
        self.version
    }

    /// Work factor (log2 of the round count).
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// The 22-character encoded randomness.
    #[must_use]
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Decode the 16 raw salt bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidSalt` if the encoded part is corrupt.
    pub fn raw_bytes(&self) -> Result<[u8; SALT_BYTES], CryptoError> {
        decode_raw(&self.encoded).map_err(CryptoError::InvalidSalt)
    }

    /// The same salt under a different version tag.
    #[must_use]
    pub fn with_version(&self, version: BcryptVersion) -> Self {
        Self {
            version,
            cost: self.cost,
            encoded: self.encoded.clone(),
        }
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}${}", self.version.tag(), self.cost, self.encoded)
    }
}

fn decode_raw(encoded: &str) -> Result<[u8; SALT_BYTES], String> {
    if encoded.len() != ENCODED_SALT_LEN {
        return Err(format!(
            "encoded salt must be {ENCODED_SALT_LEN} characters, got {}",
            encoded.len()
        ));
    }
    let decoded = Zeroizing::new(
        BCRYPT_BASE64
            .decode(encoded)
            .map_err(|e| format!("salt is not bcrypt base64: {e}"))?,
    );
    <[u8; SALT_BYTES]>::try_from(decoded.as_slice())
        .map_err(|_| format!("salt decodes to {} bytes, expected {SALT_BYTES}", decoded.len()))
}
