//! Authentication utilities library
//!
//! The single implementation of the authentication boundary shared by every service:
//! - Password hashing (bcrypt, with SHA-256 reduction of passwords over 72 bytes)
//! - JWT token issuance and validation
//! - Bearer token verification for protected endpoints
//! - The shared signing configuration ([`JwtConfig`])
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(4);
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Issue and verify
//! ```
//! use auth::{Authenticator, JwtConfig, TokenVerifier};
//!
//! let config = JwtConfig::new("secret_key_at_least_32_bytes_long!");
//! let authenticator = Authenticator::new(&config).unwrap();
//! let verifier = TokenVerifier::from_config(&config).unwrap();
//!
//! let token = authenticator.issue_token("alice").unwrap();
//! let header = format!("Bearer {}", token);
//! assert_eq!(verifier.verify(Some(&header)).unwrap(), "alice");
//! ```

pub mod authenticator;
pub mod config;
pub mod jwt;
pub mod password;
pub mod verifier;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use config::JwtConfig;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use verifier::RejectionReason;
pub use verifier::TokenVerifier;
pub use verifier::VerificationError;
