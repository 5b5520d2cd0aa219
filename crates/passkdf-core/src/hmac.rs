//! HMAC over any [`MessageDigest`] with precomputed key pads.
//!
//! The inner and outer pads are derived once in [`Hmac::new`] and reused for
//! every [`Hmac::authenticate`] call, so PBKDF2 pays the key schedule only
//! once per derivation.

use core::fmt;

use zeroize::Zeroizing;

use crate::hash::MessageDigest;

/// Inner pad byte (RFC 2104).
const IPAD: u8 = 0x36;

/// Outer pad byte (RFC 2104).
const OPAD: u8 = 0x5c;

/// Keyed HMAC instance bound to a digest.
///
/// Pads live only as long as this value and are zeroized on drop.
pub struct Hmac<'d, D: MessageDigest + ?Sized> {
    digest: &'d D,
    inner_pad: Zeroizing<Vec<u8>>,
    outer_pad: Zeroizing<Vec<u8>>,
}

impl<'d, D: MessageDigest + ?Sized> Hmac<'d, D> {
    /// Key an HMAC instance.
    ///
    /// Keys longer than the digest block size are first hashed; the result
    /// is right-padded with zeros to exactly one block.
    #[must_use]
    pub fn new(digest: &'d D, key: &[u8]) -> Self {
        let key = normalize_key(digest, key);
        Self {
            digest,
            inner_pad: xor_pad(&key, IPAD),
            outer_pad: xor_pad(&key, OPAD),
        }
    }

    /// `H(opad ‖ H(ipad ‖ message))`.
    #[must_use]
    pub fn authenticate(&self, message: &[u8]) -> Vec<u8> {
        self.authenticate_parts(&[message])
    }

    /// Authenticate the concatenation of `parts`.
    #[must_use]
    pub fn authenticate_parts(&self, parts: &[&[u8]]) -> Vec<u8> {
        let mut inner_input: Vec<&[u8]> = Vec::with_capacity(parts.len().saturating_add(1));
        inner_input.push(self.inner_pad.as_slice());
        inner_input.extend_from_slice(parts);
        let inner = Zeroizing::new(self.digest.digest_parts(&inner_input));
        self.digest
            .digest_parts(&[self.outer_pad.as_slice(), inner.as_slice()])
    }

    /// Output length of [`Hmac::authenticate`] in bytes.
    #[must_use]
    pub fn output_size(&self) -> usize {
        self.digest.output_size()
    }
}

impl<D: MessageDigest + ?Sized> fmt::Debug for Hmac<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hmac(***)")
    }
}

/// Hash an over-long key, then zero-pad to the block size.
fn normalize_key<D: MessageDigest + ?Sized>(digest: &D, key: &[u8]) -> Zeroizing<Vec<u8>> {
    let block_size = digest.block_size();
    let mut normalized = if key.len() > block_size {
        Zeroizing::new(digest.digest(key))
    } else {
        Zeroizing::new(key.to_vec())
    };
    normalized.resize(block_size, 0);
    normalized
}

fn xor_pad(key: &[u8], pad: u8) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(key.iter().map(|b| b ^ pad).collect())
}
