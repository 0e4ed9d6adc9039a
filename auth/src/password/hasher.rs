use std::borrow::Cow;

use sha2::Digest;
use sha2::Sha256;

use super::errors::PasswordError;

/// Largest input, in bytes, that bcrypt consumes. Anything past it is silently dropped.
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

/// Accepted range of the bcrypt work factor.
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses bcrypt). Passwords longer
/// than [`BCRYPT_MAX_PASSWORD_BYTES`] are reduced to the hex SHA-256 digest of their
/// UTF-8 bytes before hashing, so no part of a long password is ignored.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a new password hasher with the default bcrypt cost.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a password hasher with an explicit bcrypt cost factor.
    ///
    /// # Arguments
    /// * `cost` - Work factor, between 4 and 31 (checked when hashing)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Create a password hasher, rejecting a cost bcrypt cannot use.
    ///
    /// # Errors
    /// * `InvalidCost` - Cost outside `MIN_COST..=MAX_COST`
    pub fn try_with_cost(cost: u32) -> Result<Self, PasswordError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordError::InvalidCost(cost));
        }
        Ok(Self::with_cost(cost))
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses bcrypt with a random salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt format hash (`$2b$<cost>$<salt><hash>`)
    ///
    /// # Errors
    /// * `HashingFailed` - Cost is out of range or hashing failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(prepare(password).as_bytes(), self.cost)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored bcrypt hash
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is not a valid bcrypt string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(prepare(password).as_bytes(), hash).map_err(|e| {
            PasswordError::VerificationFailed(e.to_string())
        })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Bring a password within bcrypt's input limit.
///
/// Passwords of at most [`BCRYPT_MAX_PASSWORD_BYTES`] UTF-8 bytes are returned unchanged;
/// longer ones become the lowercase hex SHA-256 of their bytes (64 bytes).
pub fn prepare(password: &str) -> Cow<'_, str> {
    if password.len() > BCRYPT_MAX_PASSWORD_BYTES {
        Cow::Owned(hex::encode(Sha256::digest(password.as_bytes())))
    } else {
        Cow::Borrowed(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::with_cost(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert!(hash.starts_with("$2"));

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_long_password_round_trip() {
        let hasher = hasher();
        let password = "correct horse battery staple ".repeat(5);
        assert!(password.len() > BCRYPT_MAX_PASSWORD_BYTES);

        let hash = hasher.hash(&password).expect("Failed to hash password");
        assert!(hasher.verify(&password, &hash).unwrap());
    }

    #[test]
    fn test_long_password_hash_matches_reduced_form() {
        let hasher = hasher();
        let password = "x".repeat(100);
        let reduced = hex::encode(Sha256::digest(password.as_bytes()));

        let hash = hasher.hash(&password).unwrap();

        // The stored hash is a bcrypt hash of the reduced pre-image.
        assert!(bcrypt::verify(reduced.as_bytes(), &hash).unwrap());
        assert!(!bcrypt::verify(&password.as_bytes()[..72], &hash).unwrap());
    }

    #[test]
    fn test_passwords_sharing_first_72_bytes_do_not_collide() {
        let hasher = hasher();
        let prefix = "p".repeat(BCRYPT_MAX_PASSWORD_BYTES);
        let first = format!("{prefix}-first");
        let second = format!("{prefix}-second");

        let hash = hasher.hash(&first).unwrap();

        assert!(hasher.verify(&first, &hash).unwrap());
        assert!(!hasher.verify(&second, &hash).unwrap());
    }

    #[test]
    fn test_prepare_boundary() {
        let at_limit = "a".repeat(BCRYPT_MAX_PASSWORD_BYTES);
        assert!(matches!(prepare(&at_limit), Cow::Borrowed(p) if p == at_limit));

        let over_limit = "a".repeat(BCRYPT_MAX_PASSWORD_BYTES + 1);
        let reduced = prepare(&over_limit);
        assert_eq!(reduced.len(), 64);
        assert!(reduced.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_prepare_counts_bytes_not_chars() {
        // 40 characters, 80 bytes.
        let password = "é".repeat(40);
        assert_eq!(password.chars().count(), 40);
        assert!(matches!(prepare(&password), Cow::Owned(_)));

        let hasher = hasher();
        let hash = hasher.hash(&password).unwrap();
        assert!(hasher.verify(&password, &hash).unwrap());
    }

    #[test]
    fn test_distinct_short_passwords() {
        let hasher = hasher();
        let hash = hasher.hash("pw123").unwrap();
        assert!(!hasher.verify("pw124", &hash).unwrap());
        assert!(!hasher.verify("PW123", &hash).unwrap());
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = hasher();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }

    #[test]
    fn test_invalid_cost() {
        let hasher = PasswordHasher::with_cost(2);
        assert!(matches!(
            hasher.hash("password"),
            Err(PasswordError::HashingFailed(_))
        ));
    }

    #[test]
    fn test_try_with_cost_range() {
        assert_eq!(
            PasswordHasher::try_with_cost(3).unwrap_err(),
            PasswordError::InvalidCost(3)
        );
        assert_eq!(
            PasswordHasher::try_with_cost(32).unwrap_err(),
            PasswordError::InvalidCost(32)
        );
        assert_eq!(PasswordHasher::try_with_cost(MIN_COST).unwrap().cost(), 4);
        assert_eq!(PasswordHasher::try_with_cost(MAX_COST).unwrap().cost(), 31);
    }
}
