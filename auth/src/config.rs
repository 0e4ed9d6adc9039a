use std::fmt;

use chrono::Duration;
use jsonwebtoken::Algorithm;
use serde::Deserialize;

use crate::jwt::JwtError;

pub const DEFAULT_ALGORITHM: &str = "HS256";
pub const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 60;

/// Token signing settings shared by every service.
///
/// Services embed this struct in their own configuration so that defaults for the
/// algorithm and token lifetime are defined in exactly one place. The secret has no
/// default; a missing secret fails configuration loading.
#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,

    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    #[serde(default = "default_access_token_expire_minutes")]
    pub access_token_expire_minutes: i64,
}

fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.to_string()
}

fn default_access_token_expire_minutes() -> i64 {
    DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: default_algorithm(),
            access_token_expire_minutes: default_access_token_expire_minutes(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    pub fn with_access_token_expire_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expire_minutes = minutes;
        self
    }

    /// Parse the configured algorithm name.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Unknown name, or not an HMAC (HS*) algorithm
    pub fn signing_algorithm(&self) -> Result<Algorithm, JwtError> {
        let algorithm: Algorithm = self.algorithm.parse().map_err(|_| {
            JwtError::InvalidConfiguration(format!("unknown algorithm '{}'", self.algorithm))
        })?;

        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
            other => Err(JwtError::InvalidConfiguration(format!(
                "algorithm {:?} is not a shared-secret algorithm",
                other
            ))),
        }
    }

    /// Lifetime of issued access tokens.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Lifetime is zero or negative
    pub fn access_token_ttl(&self) -> Result<Duration, JwtError> {
        if self.access_token_expire_minutes <= 0 {
            return Err(JwtError::InvalidConfiguration(format!(
                "access token lifetime must be positive, got {} minutes",
                self.access_token_expire_minutes
            )));
        }

        Duration::try_minutes(self.access_token_expire_minutes).ok_or_else(|| {
            JwtError::InvalidConfiguration("access token lifetime is too large".to_string())
        })
    }

    /// Secret bytes for signing.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Secret is empty
    pub fn secret_bytes(&self) -> Result<&[u8], JwtError> {
        if self.secret.trim().is_empty() {
            return Err(JwtError::InvalidConfiguration(
                "secret must not be empty".to_string(),
            ));
        }
        Ok(self.secret.as_bytes())
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field(
                "access_token_expire_minutes",
                &self.access_token_expire_minutes,
            )
            .finish()
    }
}
