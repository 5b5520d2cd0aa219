//! PBKDF2 derivation through stored parameter sets and custom digests.

use passkdf_core::{
    derive_key, derive_with_params, CryptoError, HashAlgorithm, KeyDerivator, MessageDigest,
    Pbkdf2Params, Pbkdf2Preset, RustCryptoDigest,
};

#[test]
fn helper_matches_derivator() {
    let a =
        derive_key(HashAlgorithm::Sha384, b"pw", b"salt", 10, 70).expect("derive should succeed");
    let b = KeyDerivator::for_algorithm(HashAlgorithm::Sha384)
        .derive_key(b"pw", b"salt", 10, 70)
        .expect("derive should succeed");
    assert_eq!(a.as_slice(), b.as_slice());
}

#[test]
fn params_default_key_size_follows_digest() {
    for algorithm in HashAlgorithm::ALL {
        let params = Pbkdf2Params {
            algorithm,
            iterations: 2,
            key_size: None,
        };
        let key = derive_with_params(&params, b"pw", b"salt").expect("derive should succeed");
        assert_eq!(key.len(), algorithm.output_size(), "{algorithm}");
    }
}

#[test]
fn params_from_json_reproduce_key() {
    let params: Pbkdf2Params =
        serde_json::from_str(r#"{"algorithm":"sha1","iterations":2,"keySize":20}"#)
            .expect("deserialize should succeed");
    let key = derive_with_params(&params, b"password", b"salt").expect("derive should succeed");
    assert_eq!(
        data_encoding::HEXLOWER.encode(&key),
        "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957"
    );
}

#[test]
fn invalid_params_are_refused_before_deriving() {
    let params = Pbkdf2Params {
        iterations: 0,
        ..Pbkdf2Preset::Standard.params()
    };
    assert!(matches!(
        derive_with_params(&params, b"pw", b"salt"),
        Err(CryptoError::InvalidParameters(_))
    ));
}

#[test]
fn input_errors_surface_from_helper() {
    assert_eq!(
        derive_key(HashAlgorithm::Sha256, b"pw", b"salt", 0, 32).expect_err("must fail"),
        CryptoError::NoIterations
    );
    assert_eq!(
        derive_key(HashAlgorithm::Sha256, b"", b"salt", 1, 32).expect_err("must fail"),
        CryptoError::EmptyPassword
    );
    assert_eq!(
        derive_key(HashAlgorithm::Sha256, b"pw", b"", 1, 32).expect_err("must fail"),
        CryptoError::EmptySalt
    );
}

#[test]
fn generic_adapter_agrees_with_enum() {
    let generic = KeyDerivator::new(RustCryptoDigest::<sha2::Sha256>::new())
        .derive_key(b"password", b"salt", 3, 45)
        .expect("derive should succeed");
    let builtin = derive_key(HashAlgorithm::Sha256, b"password", b"salt", 3, 45)
        .expect("derive should succeed");
    assert_eq!(generic.as_slice(), builtin.as_slice());
}

#[test]
fn boxed_digest_is_accepted() {
    let digest: Box<dyn MessageDigest> = Box::new(HashAlgorithm::Md5);
    let key = KeyDerivator::new(digest)
        .derive_default_key(b"pw", b"salt", 1)
        .expect("derive should succeed");
    assert_eq!(key.len(), 16);
}
