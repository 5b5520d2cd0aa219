//! BCrypt algorithm version tags and their fixed field widths.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Length of a version tag including both `$` delimiters (`$2b$`).
pub const TAG_LEN: usize = 4;

/// Length of the salt segment: tag + 2-digit cost + `$` + 22 salt chars.
pub const SALT_COUNT: usize = 29;

/// Length of the encoded checksum segment.
pub const CHECKSUM_COUNT: usize = 31;

/// Total length of a bcrypt hash string.
pub const HASH_LEN: usize = SALT_COUNT + CHECKSUM_COUNT;

/// Text widths of the two segments of a hash string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldWidths {
    /// Salt segment width (tag, cost, `$`, encoded salt).
    pub salt: usize,
    /// Checksum segment width.
    pub checksum: usize,
}

/// BCrypt hash format version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BcryptVersion {
    /// `$2a$`: original OpenBSD revision.
    #[serde(rename = "2a")]
    LegacyA,
    /// `$2y$`: crypt_blowfish tag; computes exactly like `$2b$`.
    #[serde(rename = "2y")]
    CryptBlowfish,
    /// `$2b$`: current OpenBSD revision.
    #[serde(rename = "2b")]
    Latest,
}

impl BcryptVersion {
    /// All known versions.
    pub const ALL: [Self; 3] = [Self::LegacyA, Self::CryptBlowfish, Self::Latest];

    /// The 4-character tag, e.g. `$2b$`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::LegacyA => "$2a$",
            Self::CryptBlowfish => "$2y$",
            Self::Latest => "$2b$",
        }
    }

    /// Segment widths for hashes of this version.
    #[must_use]
    pub const fn field_widths(self) -> FieldWidths {
        match self {
            Self::LegacyA | Self::CryptBlowfish | Self::Latest => FieldWidths {
                salt: SALT_COUNT,
                checksum: CHECKSUM_COUNT,
            },
        }
    }

    /// The tag the cost function understands for this version.
    ///
    /// `$2y$` is rewritten to `$2b$`; the others are already canonical.
    #[must_use]
    pub const fn normalized(self) -> Self {
        match self {
            Self::CryptBlowfish => Self::Latest,
            other => other,
        }
    }

    /// Look up a version by its exact 4-character tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.tag() == tag)
    }

    /// Read the version tag at the start of `text`.
    #[must_use]
    pub fn from_prefix(text: &str) -> Option<Self> {
        text.get(..TAG_LEN).and_then(Self::from_tag)
    }
}

impl fmt::Display for BcryptVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
