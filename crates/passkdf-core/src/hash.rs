//! Message digest capability consumed by HMAC and PBKDF2.
//!
//! This module provides:
//! - [`MessageDigest`]: one-way hash with a known block size and output size
//! - [`HashAlgorithm`]: closed set of supported digest families
//! - [`RustCryptoDigest`]: adapter for any other RustCrypto `digest` hash

use core::fmt;
use core::marker::PhantomData;

use digest::core_api::BlockSizeUser;
use digest::Digest;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// A stateless one-way hash function.
pub trait MessageDigest {
    /// Internal block size in bytes (the HMAC key width).
    fn block_size(&self) -> usize;

    /// Native output size in bytes.
    fn output_size(&self) -> usize;

    /// Hash `data` in one shot.
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        self.digest_parts(&[data])
    }

    /// Hash the concatenation of `parts` without materializing it.
    fn digest_parts(&self, parts: &[&[u8]]) -> Vec<u8>;
}

impl<T: MessageDigest + ?Sized> MessageDigest for &T {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn output_size(&self) -> usize {
        (**self).output_size()
    }

    fn digest_parts(&self, parts: &[&[u8]]) -> Vec<u8> {
        (**self).digest_parts(parts)
    }
}

impl<T: MessageDigest + ?Sized> MessageDigest for Box<T> {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn output_size(&self) -> usize {
        (**self).output_size()
    }

    fn digest_parts(&self, parts: &[&[u8]]) -> Vec<u8> {
        (**self).digest_parts(parts)
    }
}

fn digest_with<D: Digest>(parts: &[&[u8]]) -> Vec<u8> {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().to_vec()
}

// ---------------------------------------------------------------------------
// Supported families
// ---------------------------------------------------------------------------

/// Digest family used for HMAC / PBKDF2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// MD5 (legacy interoperability only).
    Md5,
    /// SHA-1 (legacy interoperability only).
    Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
}

impl HashAlgorithm {
    /// Every supported family, weakest first.
    pub const ALL: [Self; 6] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// Conventional display name, e.g. `SHA-256`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl MessageDigest for HashAlgorithm {
    fn block_size(&self) -> usize {
        match self {
            Self::Md5 => <md5::Md5 as BlockSizeUser>::block_size(),
            Self::Sha1 => <sha1::Sha1 as BlockSizeUser>::block_size(),
            Self::Sha224 => <sha2::Sha224 as BlockSizeUser>::block_size(),
            Self::Sha256 => <sha2::Sha256 as BlockSizeUser>::block_size(),
            Self::Sha384 => <sha2::Sha384 as BlockSizeUser>::block_size(),
            Self::Sha512 => <sha2::Sha512 as BlockSizeUser>::block_size(),
        }
    }

    fn output_size(&self) -> usize {
        match self {
            Self::Md5 => <md5::Md5 as Digest>::output_size(),
            Self::Sha1 => <sha1::Sha1 as Digest>::output_size(),
            Self::Sha224 => <sha2::Sha224 as Digest>::output_size(),
            Self::Sha256 => <sha2::Sha256 as Digest>::output_size(),
            Self::Sha384 => <sha2::Sha384 as Digest>::output_size(),
            Self::Sha512 => <sha2::Sha512 as Digest>::output_size(),
        }
    }

    fn digest_parts(&self, parts: &[&[u8]]) -> Vec<u8> {
        match self {
            Self::Md5 => digest_with::<md5::Md5>(parts),
            Self::Sha1 => digest_with::<sha1::Sha1>(parts),
            Self::Sha224 => digest_with::<sha2::Sha224>(parts),
            Self::Sha256 => digest_with::<sha2::Sha256>(parts),
            Self::Sha384 => digest_with::<sha2::Sha384>(parts),
            Self::Sha512 => digest_with::<sha2::Sha512>(parts),
        }
    }
}

// ---------------------------------------------------------------------------
// Generic adapter
// ---------------------------------------------------------------------------

/// Wraps any RustCrypto hash (`digest` 0.10) as a [`MessageDigest`].
///
/// ```
/// use passkdf_core::hash::{MessageDigest, RustCryptoDigest};
///
/// let sha256 = RustCryptoDigest::<sha2::Sha256>::new();
/// assert_eq!(sha256.output_size(), 32);
/// ```
pub struct RustCryptoDigest<D> {
    _hash: PhantomData<fn() -> D>,
}

impl<D> RustCryptoDigest<D> {
    /// Create the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self { _hash: PhantomData }
    }
}

impl<D> Default for RustCryptoDigest<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for RustCryptoDigest<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for RustCryptoDigest<D> {}

impl<D> fmt::Debug for RustCryptoDigest<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RustCryptoDigest")
            .field("hash", &core::any::type_name::<D>())
            .finish()
    }
}

impl<D: Digest + BlockSizeUser> MessageDigest for RustCryptoDigest<D> {
    fn block_size(&self) -> usize {
        <D as BlockSizeUser>::block_size()
    }

    fn output_size(&self) -> usize {
        <D as Digest>::output_size()
    }

    fn digest_parts(&self, parts: &[&[u8]]) -> Vec<u8> {
        digest_with::<D>(parts)
    }
}
