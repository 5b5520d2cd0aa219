//! `passkdf-core`: BCrypt password hashing and PBKDF2 key derivation.
//!
//! Pure, synchronous primitives: zero network, zero async, no global state.
//! The digest transforms, the Eksblowfish cost function and the OS entropy
//! source are consumed through narrow traits so every step above them can be
//! tested with fakes.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod random;

pub mod hash;
pub mod hmac;
pub mod pbkdf2;

pub mod bcrypt;

pub mod config;

use zeroize::Zeroizing;

pub use self::bcrypt::{
    BcryptBackend, BcryptVersion, CostFunction, PasswordHash, PasswordHasher, Salt, DEFAULT_COST,
};
pub use self::config::{BcryptParams, Pbkdf2Params, Pbkdf2Preset};
pub use self::error::CryptoError;
pub use self::hash::{HashAlgorithm, MessageDigest, RustCryptoDigest};
pub use self::hmac::Hmac;
pub use self::pbkdf2::KeyDerivator;
pub use self::random::{OsRandom, SecureRandom};

/// Hash `password` with bcrypt under a fresh `$2b$` salt.
///
/// # Errors
///
/// See [`PasswordHasher::hash`].
pub fn hash_password(password: &[u8], cost: u32) -> Result<String, CryptoError> {
    PasswordHasher::new().hash(password, cost)
}

/// Check `password` against a stored bcrypt hash.
///
/// # Errors
///
/// See [`PasswordHasher::verify`].
pub fn verify_password(password: &[u8], hash: &str) -> Result<bool, CryptoError> {
    PasswordHasher::new().verify(password, hash)
}

/// Derive `key_size` bytes with PBKDF2-HMAC over `algorithm`.
///
/// # Errors
///
/// See [`KeyDerivator::derive_key`].
pub fn derive_key(
    algorithm: HashAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_size: usize,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    KeyDerivator::for_algorithm(algorithm).derive_key(password, salt, iterations, key_size)
}

/// Derive a key from a stored parameter set.
///
/// # Errors
///
/// `CryptoError::InvalidParameters` if `params` fails validation, otherwise
/// see [`KeyDerivator::derive_key`].
pub fn derive_with_params(
    params: &Pbkdf2Params,
    password: &[u8],
    salt: &[u8],
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    params.validate()?;
    KeyDerivator::for_algorithm(params.algorithm).derive_key(
        password,
        salt,
        params.iterations,
        params.resolved_key_size(),
    )
}
