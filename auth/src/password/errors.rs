use thiserror::Error;

/// bcrypt failures. A wrong password is not an error, see [`PasswordHasher::verify`].
///
/// [`PasswordHasher::verify`]: crate::PasswordHasher::verify
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("bcrypt could not hash the password: {0}")]
    HashingFailed(String),

    #[error("stored password hash is unusable: {0}")]
    VerificationFailed(String),

    #[error("bcrypt cost must be between 4 and 31, got {0}")]
    InvalidCost(u32),
}
