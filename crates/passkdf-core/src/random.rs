//! Secure random byte source used for salt generation.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::CryptoError;

/// A cryptographically secure source of random bytes.
///
/// Implementations must be safe to share between threads and must never
/// reuse or correlate output across calls.
pub trait SecureRandom: Send + Sync {
    /// Fill `buf` entirely with fresh random bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::RandomSource` if the source cannot produce bytes.
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<(), CryptoError>;
}

/// Operating-system CSPRNG (`getrandom` via `rand::rngs::OsRng`).
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<(), CryptoError> {
        OsRng.try_fill_bytes(buf).map_err(|e| {
            tracing::warn!("OS random source failed: {e}");
            CryptoError::RandomSource(format!("CSPRNG fill failed: {e}"))
        })
    }
}

impl<R: SecureRandom + ?Sized> SecureRandom for &R {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<(), CryptoError> {
        (**self).fill_bytes(buf)
    }
}
