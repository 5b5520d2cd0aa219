//! PBKDF2 key derivation (RFC 8018 §5.2) over a pluggable digest.
//!
//! This module provides:
//! - [`KeyDerivator`]: binds a [`MessageDigest`] and derives keys of any length
//! - [`KeyDerivator::derive_key`]: explicit output length
//! - [`KeyDerivator::derive_default_key`]: output length = digest output size
//!
//! The HMAC pads are computed once per call (see [`Hmac`]) and every block
//! is accumulated into its own buffer, so no intermediate `U` value is ever
//! written in place.

use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::hash::{HashAlgorithm, MessageDigest};
use crate::hmac::Hmac;

/// Largest PBKDF2 block index (`2^32 - 1`).
const MAX_BLOCK_INDEX: u64 = u32::MAX as u64;

/// PBKDF2 engine bound to one digest.
///
/// Stateless between calls; safe to share across threads when `D` is.
#[derive(Clone, Debug)]
pub struct KeyDerivator<D> {
    digest: D,
}

impl KeyDerivator<HashAlgorithm> {
    /// Build a derivator for one of the supported digest families.
    #[must_use]
    pub const fn for_algorithm(algorithm: HashAlgorithm) -> Self {
        Self { digest: algorithm }
    }
}

impl<D: MessageDigest> KeyDerivator<D> {
    /// Build a derivator over an arbitrary digest.
    #[must_use]
    pub const fn new(digest: D) -> Self {
        Self { digest }
    }

    /// The bound digest.
    #[must_use]
    pub const fn digest(&self) -> &D {
        &self.digest
    }

    /// Largest key size this digest allows: `(2^32 - 1) * block_size`.
    #[must_use]
    pub fn max_key_size(&self) -> u64 {
        let block_size = u64::try_from(self.digest.block_size()).unwrap_or(u64::MAX);
        MAX_BLOCK_INDEX.saturating_mul(block_size)
    }

    /// Derive a key whose length equals the digest's native output size.
    ///
    /// # Errors
    ///
    /// Same as [`KeyDerivator::derive_key`].
    pub fn derive_default_key(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
    ) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        self.derive_key(password, salt, iterations, self.digest.output_size())
    }

    /// Derive `key_size` bytes from `password` and `salt`.
    ///
    /// Output is deterministic for a given (password, salt, iterations,
    /// key size, digest). Nothing is returned unless every block completed.
    ///
    /// # Errors
    ///
    /// - `CryptoError::NoIterations` if `iterations == 0`
    /// - `CryptoError::EmptyPassword` if `password` is empty
    /// - `CryptoError::EmptySalt` if `salt` is empty
    /// - `CryptoError::KeySizeTooLarge` if `key_size` exceeds
    ///   [`KeyDerivator::max_key_size`] or needs more than `2^32 - 1` blocks
    pub fn derive_key(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        key_size: usize,
    ) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        if iterations == 0 {
            return Err(CryptoError::NoIterations);
        }
        if password.is_empty() {
            return Err(CryptoError::EmptyPassword);
        }
        if salt.is_empty() {
            return Err(CryptoError::EmptySalt);
        }

        let max = self.max_key_size();
        if u64::try_from(key_size).map_or(true, |requested| requested > max) {
            return Err(CryptoError::KeySizeTooLarge {
                requested: key_size,
                max,
            });
        }

        let output_size = self.digest.output_size();
        let block_count = key_size.div_ceil(output_size.max(1));
        let Ok(block_count) = u32::try_from(block_count) else {
            let output_size = u64::try_from(output_size).unwrap_or(u64::MAX);
            return Err(CryptoError::KeySizeTooLarge {
                requested: key_size,
                max: MAX_BLOCK_INDEX.saturating_mul(output_size),
            });
        };

        tracing::debug!(iterations, key_size, block_count, "deriving PBKDF2 key");

        let mac = Hmac::new(&self.digest, password);
        let mut derived = Zeroizing::new(Vec::with_capacity(key_size));
        for index in 1..=block_count {
            let block = derive_block(&mac, salt, iterations, index);
            let remaining = key_size.saturating_sub(derived.len());
            let take = remaining.min(block.len());
            derived.extend_from_slice(&block[..take]);
        }

        Ok(derived)
    }
}

/// `T_i = U_1 ^ U_2 ^ ... ^ U_c` with `U_1 = PRF(salt || BE32(i))`.
fn derive_block<D: MessageDigest + ?Sized>(
    mac: &Hmac<'_, D>,
    salt: &[u8],
    iterations: u32,
    index: u32,
) -> Zeroizing<Vec<u8>> {
    let mut u = Zeroizing::new(mac.authenticate_parts(&[salt, &index.to_be_bytes()[..]]));
    let mut block = Zeroizing::new(u.to_vec());
    for _ in 1..iterations {
        u = Zeroizing::new(mac.authenticate(&u));
        xor_into(&mut block, &u);
    }
    block
}

fn xor_into(acc: &mut [u8], input: &[u8]) {
    for (a, b) in acc.iter_mut().zip(input) {
        *a ^= b;
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
