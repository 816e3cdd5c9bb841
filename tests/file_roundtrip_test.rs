//! End-to-end tests through the public API.
//!
//! These cover the properties the on-disk format has to keep: round trips
//! for any password and size, fresh IVs, and the `.enc` naming convention.

use filecrypt::crypto::{Pbkdf2KeyDeriver, BLOCK_SIZE, IV_SIZE};
use filecrypt::{decrypt, derive_key, encrypt, Config, CryptError, FileCodec, KeyDeriver};

/// Round trip holds for empty, short, aligned and multi-block inputs under
/// a mix of passwords, including empty, non-ASCII and over-long ones.
#[test]
fn test_roundtrip_passwords_and_sizes() {
    let long = "x".repeat(40);
    let passwords: [&str; 5] = ["", "a", "correct horse battery staple", "p\u{00e4}ssw\u{00f6}rd", &long];
    let sizes = [0usize, 5, 16, 100, 4096];

    for password in passwords {
        let key = derive_key(password);
        for size in sizes {
            let plaintext: Vec<u8> = (0..size).map(|i| (i * 7 % 256) as u8).collect();
            let container = encrypt(&plaintext, &key);
            assert_eq!((container.len() - IV_SIZE) % BLOCK_SIZE, 0);
            assert_eq!(decrypt(&container, &key).unwrap(), plaintext);
        }
    }
}

/// Two encryptions of the same input never share an IV or a container.
#[test]
fn test_repeated_encryption_differs() {
    let key = derive_key("same-key");
    let c1 = encrypt(b"identical plaintext", &key);
    let c2 = encrypt(b"identical plaintext", &key);
    assert_ne!(c1[..IV_SIZE], c2[..IV_SIZE]);
    assert_ne!(c1, c2);
}

/// A 40-character password keys exactly like its first 32 characters.
#[test]
fn test_long_password_truncation_is_compatible() {
    let long = "abcdefghijklmnopqrstuvwxyz0123456789WXYZ";
    let container = encrypt(b"payload", &derive_key(long));
    let decrypted = decrypt(&container, &derive_key(&long[..32])).unwrap();
    assert_eq!(decrypted, b"payload");
}

#[test]
fn test_malformed_inputs() {
    let key = derive_key("pw");
    assert!(matches!(decrypt(&[0u8; 10], &key), Err(CryptError::MalformedContainer { len: 10 })));
    assert!(matches!(decrypt(&[0u8; 40], &key), Err(CryptError::MalformedContainer { len: 40 })));
}

/// notes.txt -> notes.txt.enc (32 bytes) -> notes.txt.
#[test]
fn test_notes_file_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, b"hello").unwrap();
    let key = derive_key("scenario");
    let codec = FileCodec::default();

    let enc = codec.encrypt_file(notes.to_str().unwrap(), &key).unwrap();
    assert_eq!(enc.file_name().unwrap(), "notes.txt.enc");
    assert_eq!(std::fs::metadata(&enc).unwrap().len(), 32);

    std::fs::remove_file(&notes).unwrap();
    let dec = codec.decrypt_file(enc.to_str().unwrap(), &key).unwrap();
    assert_eq!(dec, notes);
    assert_eq!(std::fs::read(&notes).unwrap(), b"hello");
}

/// A configured PBKDF2 deriver plugs in without touching the codec.
#[test]
fn test_configured_pbkdf2_file_roundtrip() {
    let config = Config::from_toml(
        "atomic_writes = true\n[kdf]\nscheme = \"pbkdf2\"\nsalt = \"00112233445566778899aabbccddeeff\"\niterations = 1000\n",
    )
    .unwrap();
    let deriver = config.kdf.build_deriver().unwrap();
    let key = deriver.derive("hunter2");
    assert_ne!(key, derive_key("hunter2"));

    let expected = Pbkdf2KeyDeriver::new(hex_salt(), 1000).derive("hunter2");
    assert_eq!(key, expected);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.md");
    std::fs::write(&path, b"# title\n").unwrap();
    let codec = config.file_codec();
    let enc = codec.encrypt_file(path.to_str().unwrap(), &key).unwrap();
    std::fs::remove_file(&path).unwrap();
    codec.decrypt_file(enc.to_str().unwrap(), &key).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"# title\n");
}

fn hex_salt() -> Vec<u8> {
    (0u8..16).map(|i| i * 0x11).collect()
}
