//! Openwall crypt_blowfish test vectors.

use passkdf_core::bcrypt::PasswordHasher;
use passkdf_core::CryptoError;

// (password, hash)
const OPENWALL: [(&[u8], &str); 4] = [
    (b"U*U", "$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW"),
    (b"U*U*", "$2a$05$CCCCCCCCCCCCCCCCCCCCC.VGOzA784oUp/Z0DY336zx7pLYAy0lwK"),
    (b"U*U*U", "$2a$05$XXXXXXXXXXXXXXXXXXXXXOAcXxm9kjPGEMsLznoKqmqw7tc8WCx4a"),
    (b"", "$2a$05$CCCCCCCCCCCCCCCCCCCCC.7uG0VCzI2bS7j6ymqJi9CdcdxiRTWNy"),
];

#[test]
fn openwall_hashes_reproduce() {
    let hasher = PasswordHasher::new();
    for (password, expected) in OPENWALL {
        let hash = hasher
            .hash_with_salt(password, &expected[..29])
            .expect("hash should succeed");
        assert_eq!(hash, expected);
    }
}

#[test]
fn openwall_hashes_verify() {
    let hasher = PasswordHasher::new();
    for (password, expected) in OPENWALL {
        assert!(
            hasher.verify(password, expected).expect("verify should succeed"),
            "{expected}"
        );
    }
}

/// The same checksums are valid under `$2y$` and `$2b$`.
#[test]
fn openwall_hashes_verify_under_every_tag() {
    let hasher = PasswordHasher::new();
    for (password, expected) in OPENWALL {
        for tag in ["$2y$", "$2b$"] {
            let retagged = expected.replacen("$2a$", tag, 1);
            let hash = hasher
                .hash_with_salt(password, &retagged[..29])
                .expect("hash should succeed");
            assert_eq!(hash, retagged);
            assert!(hasher.verify(password, &retagged).expect("verify should succeed"));
        }
    }
}

#[test]
fn wrong_password_fails_openwall_hash() {
    let hasher = PasswordHasher::new();
    assert!(!hasher
        .verify(b"U*U*", OPENWALL[0].1)
        .expect("verify should succeed"));
}

#[test]
fn unknown_tag_is_rejected() {
    let hasher = PasswordHasher::new();
    let err = hasher
        .hash_with_salt(b"x", "$2x$05$CCCCCCCCCCCCCCCCCCCCC.")
        .expect_err("unknown tag must fail");
    assert!(matches!(err, CryptoError::InvalidSalt(_)));

    let err = hasher
        .verify(b"x", "$2x$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW")
        .expect_err("unknown tag must fail");
    assert!(matches!(err, CryptoError::InvalidHashFormat(_)));
}
