use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Memory cost in KiB.
pub const MEMORY_COST_KIB: u32 = 19 * 1024;

/// Number of passes over memory.
pub const TIME_COST: u32 = 2;

/// Degree of parallelism.
pub const PARALLELISM: u32 = 1;

/// Salted one-way password hashing (Argon2id).
///
/// Cost parameters are fixed so every stored digest costs the same to brute-force.
/// Verification reads the salt and parameters back out of the stored PHC string,
/// so digests produced under older parameters keep verifying.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Returns
    /// PHC string (algorithm, version, parameters, salt and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Salt generation or the hash computation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext password against a stored digest.
    ///
    /// A wrong password is `Ok(false)`, never an error.
    ///
    /// # Errors
    /// * `VerificationFailed` - The stored digest is malformed or uses an unsupported algorithm
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        match self.argon2()?.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }

    fn argon2(&self) -> Result<Argon2<'static>, PasswordError> {
        let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "secret1";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));

        assert!(!hasher
            .verify("wrong", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hash_embeds_fixed_parameters() {
        let hash = PasswordHasher::new().hash("secret1").unwrap();

        assert!(hash.starts_with("$argon2id$v=19$m=19456,t=2,p=1$"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &first).unwrap());
        assert!(hasher.verify("secret1", &second).unwrap());
    }

    #[test]
    fn test_empty_password_does_not_match_real_one() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("secret1").unwrap();

        assert!(!hasher.verify("", &hash).unwrap());
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }
}
