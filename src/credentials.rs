// 🔐 Credentials - one-way hashing for the seeded test identities
//
// The canonical dataset carries plaintext passwords ("admin123", ...).
// They go through a CredentialHasher before touching the store; the stored
// form is "pbkdf2_sha256$<iterations>$<salt>$<base64 digest>".

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// One-way hashing facility for identity credentials.
pub trait CredentialHasher {
    fn hash(&self, plaintext: &str) -> String;

    fn verify(&self, plaintext: &str, stored: &str) -> bool;
}

/// PBKDF2 with HMAC-SHA256 and a random per-password salt.
#[derive(Debug, Clone, Copy)]
pub struct Pbkdf2Hasher {
    pub rounds: u32,
}

pub const DEFAULT_ROUNDS: u32 = 600_000;

const ALGORITHM: &str = "pbkdf2_sha256";
const DIGEST_LEN: usize = 32;

impl Pbkdf2Hasher {
    pub fn new() -> Self {
        Pbkdf2Hasher {
            rounds: DEFAULT_ROUNDS,
        }
    }

    fn derive(rounds: u32, salt: &str, plaintext: &str) -> [u8; DIGEST_LEN] {
        let mut digest = [0u8; DIGEST_LEN];
        pbkdf2::pbkdf2_hmac::<Sha256>(plaintext.as_bytes(), salt.as_bytes(), rounds, &mut digest);
        digest
    }
}

impl Default for Pbkdf2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for Pbkdf2Hasher {
    fn hash(&self, plaintext: &str) -> String {
        let salt = uuid::Uuid::new_v4().simple().to_string();
        let digest = Self::derive(self.rounds, &salt, plaintext);
        format!("{}${}${}${}", ALGORITHM, self.rounds, salt, STANDARD.encode(digest))
    }

    /// Rounds come from the stored value, so hashes made with another
    /// iteration count still verify.
    fn verify(&self, plaintext: &str, stored: &str) -> bool {
        let parts: Vec<&str> = stored.split('$').collect();
        let [algorithm, rounds, salt, encoded] = parts.as_slice() else {
            return false;
        };
        if *algorithm != ALGORITHM {
            return false;
        }
        let Ok(rounds) = rounds.parse::<u32>() else {
            return false;
        };
        if rounds == 0 {
            return false;
        }
        let Ok(expected) = STANDARD.decode(*encoded) else {
            return false;
        };

        let digest = Self::derive(rounds, salt, plaintext);
        digest.as_slice().ct_eq(expected.as_slice()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hasher = Pbkdf2Hasher { rounds: 1_000 };
        let stored = hasher.hash("student123");

        assert!(!stored.contains("student123"));
        assert!(stored.starts_with("pbkdf2_sha256$1000$"));
    }

    #[test]
    fn test_default_rounds() {
        assert_eq!(Pbkdf2Hasher::default().rounds, DEFAULT_ROUNDS);
    }

    #[test]
    fn test_verify_round_trip() {
        let hasher = Pbkdf2Hasher { rounds: 10 };
        let stored = hasher.hash("admin123");

        assert!(hasher.verify("admin123", &stored));
        assert!(!hasher.verify("admin124", &stored));
    }

    #[test]
    fn test_matches_known_pbkdf2_sha256_vector() {
        // RFC 7914 section 11: P="passwd", S="salt", c=1, dkLen=64 (first 32 bytes)
        let digest = Pbkdf2Hasher::derive(1, "salt", "passwd");
        let expected: [u8; 8] = [0x55, 0xac, 0x04, 0x6e, 0x56, 0xe3, 0x08, 0x9f];
        assert_eq!(&digest[..8], &expected);
    }

    #[test]
    fn test_verify_uses_stored_rounds() {
        let stored = Pbkdf2Hasher { rounds: 3 }.hash("staff123");
        assert!(Pbkdf2Hasher { rounds: 7 }.verify("staff123", &stored));
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let hasher = Pbkdf2Hasher { rounds: 1 };
        let first = hasher.hash("staff123");
        let second = hasher.hash("staff123");

        assert_ne!(first, second);
        assert!(hasher.verify("staff123", &first));
        assert!(hasher.verify("staff123", &second));
    }

    #[test]
    fn test_verify_rejects_malformed_hashes() {
        let hasher = Pbkdf2Hasher { rounds: 1 };

        assert!(!hasher.verify("x", "admin123"));
        assert!(!hasher.verify("x", "md5$1$salt$abc"));
        assert!(!hasher.verify("x", "pbkdf2_sha256$zero$salt$abc"));
        assert!(!hasher.verify("x", "pbkdf2_sha256$0$salt$abc"));
        assert!(!hasher.verify("x", "pbkdf2_sha256$1$salt$not base64!"));
        assert!(!hasher.verify("x", "pbkdf2_sha256$1$salt$AAAA"));
    }
}
