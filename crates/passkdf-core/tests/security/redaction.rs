//! Key material must not leak through `Debug` formatting.

use passkdf_core::{HashAlgorithm, Hmac};

#[test]
fn hmac_debug_hides_pads() {
    let key = b"super secret hmac key";
    let mac = Hmac::new(&HashAlgorithm::Sha256, key);
    let debug = format!("{mac:?}");
    assert!(!debug.contains("super"), "{debug}");
    assert_eq!(debug, "Hmac(***)");
}

