//! Parsing of complete `$2x$NN$<salt><checksum>` hash strings.

use core::fmt;

use super::version::{BcryptVersion, CHECKSUM_COUNT, HASH_LEN, SALT_COUNT};
use crate::error::CryptoError;

/// A hash string split into its fixed-width segments.
///
/// Borrowed from the input; no segment is ever truncated or padded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordHash<'a> {
    version: BcryptVersion,
    salt: &'a str,
    checksum: &'a str,
}

impl<'a> PasswordHash<'a> {
    /// Split `text` into version, 29-char salt segment and 31-char checksum.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidHashFormat` if the tag is unknown, the
    /// string is not ASCII, or either segment has the wrong width.
    pub fn parse(text: &'a str) -> Result<Self, CryptoError> {
        let version = BcryptVersion::from_prefix(text)
            .ok_or_else(|| CryptoError::InvalidHashFormat("unrecognized version tag".into()))?;
        let widths = version.field_widths();

        if !text.is_ascii() {
            return Err(CryptoError::InvalidHashFormat("hash must be ASCII".into()));
        }
        if text.len() != HASH_LEN {
            return Err(CryptoError::InvalidHashFormat(format!(
                "expected {HASH_LEN} characters, got {}",
                text.len()
            )));
        }

        let salt = text
            .get(..widths.salt)
            .filter(|s| s.len() == SALT_COUNT)
            .ok_or_else(|| CryptoError::InvalidHashFormat("salt segment truncated".into()))?;
        let checksum = text
            .len()
            .checked_sub(widths.checksum)
            .and_then(|start| text.get(start..))
            .filter(|c| c.len() == CHECKSUM_COUNT)
            .ok_or_else(|| CryptoError::InvalidHashFormat("checksum segment truncated".into()))?;

        Ok(Self {
            version,
            salt,
            checksum,
        })
    }

    /// Version tag the hash was stored under.
    #[must_use]
    pub const fn version(&self) -> BcryptVersion {
        self.version
    }

    /// The 29-character salt segment (tag, cost, `$`, encoded salt).
    #[must_use]
    pub const fn salt(&self) -> &'a str {
        self.salt
    }

    /// The 31-character encoded checksum.
    #[must_use]
    pub const fn checksum(&self) -> &'a str {
        self.checksum
    }
}

impl fmt::Display for PasswordHash<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.salt, self.checksum)
    }
}
