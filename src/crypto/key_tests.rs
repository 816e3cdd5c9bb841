//! Tests for key derivation.

use super::*;

#[test]
fn test_legacy_derivation_deterministic() {
    let k1 = derive_key("correct horse battery staple");
    let k2 = derive_key("correct horse battery staple");
    assert_eq!(k1, k2);
}

#[test]
fn test_legacy_empty_password_is_all_zero() {
    let key = derive_key("");
    assert_eq!(key.as_bytes(), &[0u8; KEY_SIZE]);
}

#[test]
fn test_legacy_short_password_zero_padded() {
    let key = derive_key("abc");
    assert_eq!(&key.as_bytes()[..3], b"abc");
    assert!(key.as_bytes()[3..].iter().all(|&b| b == 0));
}

#[test]
fn test_legacy_long_password_truncated() {
    let password = "0123456789abcdefghijklmnopqrstuvwxyzABCD";
    assert_eq!(password.len(), 40);
    let key = derive_key(password);
    assert_eq!(key.as_bytes(), &password.as_bytes()[..32]);
}

#[test]
fn test_legacy_exact_length_unchanged() {
    let password = "A".repeat(KEY_SIZE);
    let key = derive_key(&password);
    assert_eq!(key.as_bytes(), &[b'A'; KEY_SIZE]);
}

#[test]
fn test_legacy_truncates_utf8_bytewise() {
    // 11 three-byte characters = 33 bytes; the last one gets split.
    let password = "\u{20AC}".repeat(11);
    let key = derive_key(&password);
    assert_eq!(key.as_bytes(), &password.as_bytes()[..32]);
}

#[test]
fn test_legacy_deriver_matches_free_function() {
    let deriver = LegacyKeyDeriver;
    assert_eq!(deriver.derive("hunter2"), derive_key("hunter2"));
    assert_eq!(deriver.name(), "legacy");
}

#[test]
fn test_pbkdf2_known_vector() {
    let deriver = Pbkdf2KeyDeriver::new(b"salt".to_vec(), 1);
    let key = deriver.derive("password");
    let expected = hex::decode("120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b").unwrap();
    assert_eq!(key.as_bytes().as_slice(), expected.as_slice());
}

#[test]
fn test_pbkdf2_deterministic() {
    let deriver = Pbkdf2KeyDeriver::new(vec![7u8; MIN_SALT_SIZE], 1_000);
    assert_eq!(deriver.derive("password"), deriver.derive("password"));
}

#[test]
fn test_pbkdf2_different_salts() {
    let d1 = Pbkdf2KeyDeriver::new(vec![1u8; MIN_SALT_SIZE], 1_000);
    let d2 = Pbkdf2KeyDeriver::new(vec![2u8; MIN_SALT_SIZE], 1_000);
    assert_ne!(d1.derive("password"), d2.derive("password"));
}

#[test]
fn test_pbkdf2_differs_from_legacy() {
    let deriver = Pbkdf2KeyDeriver::new(vec![0u8; MIN_SALT_SIZE], 1_000);
    assert_ne!(deriver.derive("password"), derive_key("password"));
}

#[test]
fn test_key_debug_redacted() {
    let key = derive_key("secret-password");
    let rendered = format!("{:?}", key);
    assert_eq!(rendered, "Key([REDACTED])");
    assert!(!rendered.contains("secret"));
}

#[test]
fn test_deriver_usable_as_trait_object() {
    let derivers: Vec<Box<dyn KeyDeriver>> = vec![
        Box::new(LegacyKeyDeriver),
        Box::new(Pbkdf2KeyDeriver::new(vec![9u8; MIN_SALT_SIZE], 10)),
    ];
    for deriver in &derivers {
        assert_eq!(deriver.derive("pw").as_bytes().len(), KEY_SIZE);
    }
}
