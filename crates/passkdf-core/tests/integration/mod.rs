mod key_derivation;
mod password_roundtrip;
