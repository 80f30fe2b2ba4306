use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Provides salted one-way password hashing (internally uses Argon2id).
/// Every call to [`CredentialHasher::hash`] draws a fresh random salt, so
/// hashing the same password twice yields different hashes.
pub struct CredentialHasher;

impl CredentialHasher {
    /// Create a new hasher instance.
    ///
    /// # Returns
    /// CredentialHasher configured with secure defaults
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password securely.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// A mismatch is an `Ok(false)`, not an error; the error path is
    /// reserved for hashes that cannot be parsed at all.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `MalformedHash` - Stored hash is not a valid PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        let argon2 = Argon2::default();

        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = CredentialHasher::new();
        let password = "abc123";

        let hash = hasher.hash(password).expect("Failed to hash password");

        // Verify correct password
        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));

        // Verify incorrect password
        assert!(!hasher
            .verify("abc124", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = CredentialHasher::new();

        let first = hasher.hash("abc123").expect("Failed to hash password");
        let second = hasher.hash("abc123").expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify("abc123", &first).expect("Failed to verify"));
        assert!(hasher.verify("abc123", &second).expect("Failed to verify"));
    }

    #[test]
    fn test_hash_does_not_contain_password() {
        let hasher = CredentialHasher::new();
        let hash = hasher.hash("abc123").expect("Failed to hash password");

        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("abc123"));
    }

    #[test]
    fn test_verify_malformed_hash() {
        let hasher = CredentialHasher::new();

        let result = hasher.verify("abc123", "not_a_phc_string");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }
}
