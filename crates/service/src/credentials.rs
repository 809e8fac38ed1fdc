//! Password encoding and verification.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;

use crate::errors::ServiceError;

pub trait PasswordEncoder: Send + Sync {
    /// Produce an opaque encoded form of `raw`.
    fn encode(&self, raw: &str) -> Result<String, ServiceError>;

    /// Whether `raw` matches a previously encoded value. Malformed hashes never match.
    fn matches(&self, raw: &str, encoded: &str) -> bool;
}

/// Argon2id with a random salt, stored as a PHC string.
#[derive(Clone, Default)]
pub struct Argon2PasswordEncoder {
    argon2: Argon2<'static>,
}

impl PasswordEncoder for Argon2PasswordEncoder {
    fn encode(&self, raw: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| ServiceError::Hash(e.to_string()))?;
        Ok(hash.to_string())
    }

    fn matches(&self, raw: &str, encoded: &str) -> bool {
        match PasswordHash::new(encoded) {
            Ok(parsed) => self.argon2.verify_password(raw.as_bytes(), &parsed).is_ok(),
            Err(_) => false,
        }
    }
}

/// Cheap encoders for tests and doc examples
pub mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Prefixes the raw value; counts calls to `encode`.
    #[derive(Default)]
    pub struct PlainPasswordEncoder {
        encoded: AtomicUsize,
    }

    impl PlainPasswordEncoder {
        pub fn encode_calls(&self) -> usize { self.encoded.load(Ordering::SeqCst) }
    }

    impl PasswordEncoder for PlainPasswordEncoder {
        fn encode(&self, raw: &str) -> Result<String, ServiceError> {
            self.encoded.fetch_add(1, Ordering::SeqCst);
            Ok(format!("plain:{raw}"))
        }

        fn matches(&self, raw: &str, encoded: &str) -> bool {
            encoded.strip_prefix("plain:") == Some(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argon2_round_trip() {
        let enc = Argon2PasswordEncoder::default();
        let hash = enc.encode("Passw0rd").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(enc.matches("Passw0rd", &hash));
        assert!(!enc.matches("passw0rd", &hash));
    }

    #[test]
    fn salts_differ_between_encodings() {
        let enc = Argon2PasswordEncoder::default();
        assert_ne!(enc.encode("same").unwrap(), enc.encode("same").unwrap());
    }

    #[test]
    fn garbage_hash_never_matches() {
        assert!(!Argon2PasswordEncoder::default().matches("x", "not-a-phc-string"));
    }
}
