// src/crypto.rs
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a plaintext password.
///
/// This is the only form in which passwords are ever persisted: a one-way,
/// fixed-size digest (32 bytes, 64 lowercase hex characters). Deliberately
/// deterministic so the same plaintext always maps to the same stored hash.
pub fn sha256_hex(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_vector() {
        assert_eq!(
            sha256_hex("p@ss"),
            "a4048cba70dad0be0b01a8bb00027c775386c3f6194943ad3bf37204781edbc5"
        );
    }

    #[test]
    fn empty_input_hashes_to_the_empty_string_digest() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_is_64_lowercase_hex_chars() {
        let digest = sha256_hex("hunter2");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
