//! Password hashing round-trips through the crate-level helpers.

use passkdf_core::bcrypt::{PasswordHash, Salt, HASH_LEN};
use passkdf_core::{
    hash_password, verify_password, BcryptParams, BcryptVersion, CryptoError, PasswordHasher,
};

const COST: u32 = 4;

#[test]
fn hash_then_verify_via_helpers() {
    let hash = hash_password(b"correct horse battery staple", COST).expect("hash should succeed");
    assert!(hash.starts_with("$2b$04$"), "{hash}");
    assert_eq!(hash.len(), HASH_LEN);

    assert!(
        verify_password(b"correct horse battery staple", &hash).expect("verify should succeed")
    );
    assert!(
        !verify_password(b"correct horse battery stapler", &hash).expect("verify should succeed")
    );
}

#[test]
fn fresh_salts_give_distinct_hashes() {
    let a = hash_password(b"same password", COST).expect("hash should succeed");
    let b = hash_password(b"same password", COST).expect("hash should succeed");
    assert_ne!(a, b);
    assert!(verify_password(b"same password", &a).expect("verify should succeed"));
    assert!(verify_password(b"same password", &b).expect("verify should succeed"));
}

#[test]
fn params_select_output_tag() {
    let hasher = PasswordHasher::new();
    for version in BcryptVersion::ALL {
        let params = BcryptParams { cost: COST, version };
        let hash = hasher
            .hash_with_params(b"tagged", &params)
            .expect("hash should succeed");
        let parsed = PasswordHash::parse(&hash).expect("parse should succeed");
        assert_eq!(parsed.version(), version);
        assert!(hasher.verify(b"tagged", &hash).expect("verify should succeed"));
    }
}

#[test]
fn params_out_of_range_are_refused() {
    let params = BcryptParams {
        cost: 3,
        ..BcryptParams::default()
    };
    let err = PasswordHasher::new()
        .hash_with_params(b"pw", &params)
        .expect_err("cost 3 must be refused");
    assert!(matches!(err, CryptoError::InvalidParameters(_)));
}

#[test]
fn stored_json_params_drive_hashing() {
    let params: BcryptParams =
        serde_json::from_str(r#"{"cost":4,"version":"2a"}"#).expect("deserialize should succeed");
    let hash = PasswordHasher::new()
        .hash_with_params(b"from config", &params)
        .expect("hash should succeed");
    assert!(hash.starts_with("$2a$04$"), "{hash}");
}

#[test]
fn crypt_blowfish_hash_from_another_system_verifies() {
    let hasher = PasswordHasher::new();
    let salt = Salt::generate(&passkdf_core::OsRandom, BcryptVersion::CryptBlowfish, COST)
        .expect("salt generation should succeed");
    let hash = hasher
        .hash_with_salt(b"php password", &salt.to_string())
        .expect("hash should succeed");
    assert!(hash.starts_with("$2y$04$"));
    assert_eq!(&hash[..29], salt.to_string());
    assert!(verify_password(b"php password", &hash).expect("verify should succeed"));
}

#[test]
fn bytes_beyond_72_are_ignored() {
    let long = [b'a'; 100];
    let hash = hash_password(&long, COST).expect("hash should succeed");
    assert!(verify_password(&long[..72], &hash).expect("verify should succeed"));
}

#[test]
fn malformed_hashes_are_errors_not_mismatches() {
    for bad in [
        "",
        "not a hash",
        "$2b$04$tooshort",
        "$2b$xx$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW",
        "$2b$04!CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW",
        "$2b$04$CCCCCCCCCCCCCCCCCCCC*.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW",
    ] {
        let err = verify_password(b"pw", bad).expect_err("malformed hash must fail");
        assert!(matches!(err, CryptoError::InvalidHashFormat(_)), "{bad}: {err:?}");
    }
}
