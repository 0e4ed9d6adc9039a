use std::fmt;

use chrono::Utc;
use thiserror::Error;

use crate::config::JwtConfig;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Why a presented token was refused.
///
/// Kept out of the public error message so clients cannot tell a forged token from an
/// expired or malformed one. Safe to log: never contains the token itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    MalformedHeader,
    UnsupportedScheme,
    Expired,
    BadSignature,
    MissingSubject,
    Malformed,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RejectionReason::MalformedHeader => "malformed authorization header",
            RejectionReason::UnsupportedScheme => "unsupported authorization scheme",
            RejectionReason::Expired => "token expired",
            RejectionReason::BadSignature => "signature or algorithm mismatch",
            RejectionReason::MissingSubject => "token has no subject",
            RejectionReason::Malformed => "token could not be decoded",
        };
        f.write_str(reason)
    }
}

/// Token verification failures. Both map to HTTP 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("missing token")]
    MissingToken,

    #[error("invalid token")]
    InvalidToken(RejectionReason),
}

impl From<JwtError> for VerificationError {
    fn from(err: JwtError) -> Self {
        let reason = match err {
            JwtError::TokenExpired => RejectionReason::Expired,
            JwtError::InvalidToken(_) => RejectionReason::BadSignature,
            JwtError::MissingClaim(_)
            | JwtError::DecodingFailed(_)
            | JwtError::EncodingFailed(_)
            | JwtError::InvalidConfiguration(_) => RejectionReason::Malformed,
        };
        VerificationError::InvalidToken(reason)
    }
}

/// Stateless bearer token verifier used as the guard of every protected endpoint.
pub struct TokenVerifier {
    jwt_handler: JwtHandler,
}

impl TokenVerifier {
    /// Build a verifier from the shared configuration.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Empty secret or non-HMAC algorithm
    pub fn from_config(config: &JwtConfig) -> Result<Self, JwtError> {
        Ok(Self {
            jwt_handler: JwtHandler::from_config(config)?,
        })
    }

    /// Verify an `Authorization` header value and return the token subject.
    ///
    /// Accepts exactly `<scheme> <token>` where the scheme is `Bearer`, compared without
    /// regard to ASCII case.
    ///
    /// # Errors
    /// * `MissingToken` - No header was sent
    /// * `InvalidToken` - Any other failure
    pub fn verify(&self, authorization: Option<&str>) -> Result<String, VerificationError> {
        let token = bearer_token(authorization)?;
        self.verify_token(token)
    }

    /// Verify a raw token and return its subject.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, expired, malformed, or no subject
    pub fn verify_token(&self, token: &str) -> Result<String, VerificationError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(VerificationError::InvalidToken(RejectionReason::Expired));
        }

        claims
            .subject()
            .map(str::to_string)
            .ok_or(VerificationError::InvalidToken(
                RejectionReason::MissingSubject,
            ))
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// # Errors
/// * `MissingToken` - Header absent
/// * `InvalidToken` - Not two whitespace-separated parts, or scheme is not `bearer`
pub fn bearer_token(authorization: Option<&str>) -> Result<&str, VerificationError> {
    let header = authorization.ok_or(VerificationError::MissingToken)?;

    let mut parts = header.split_whitespace();
    let (scheme, token) = match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) => (scheme, token),
        _ => {
            return Err(VerificationError::InvalidToken(
                RejectionReason::MalformedHeader,
            ))
        }
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(VerificationError::InvalidToken(
            RejectionReason::UnsupportedScheme,
        ));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::Authenticator;

    const SECRET: &str = "verifier_secret_key_at_least_32_bytes";

    fn config() -> JwtConfig {
        JwtConfig::new(SECRET)
    }

    fn verifier() -> TokenVerifier {
        TokenVerifier::from_config(&config()).unwrap()
    }

    fn issue(subject: &str) -> String {
        Authenticator::new(&config())
            .unwrap()
            .issue_token(subject)
            .unwrap()
    }

    #[test]
    fn test_issued_token_verifies_to_subject() {
        let token = issue("alice");
        let header = format!("Bearer {}", token);

        assert_eq!(verifier().verify(Some(&header)), Ok("alice".to_string()));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let token = issue("alice");

        for scheme in ["bearer", "BEARER", "BeArEr"] {
            let header = format!("{} {}", scheme, token);
            assert_eq!(verifier().verify(Some(&header)), Ok("alice".to_string()));
        }
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            verifier().verify(None),
            Err(VerificationError::MissingToken)
        );
    }

    #[test]
    fn test_basic_scheme_rejected() {
        assert_eq!(
            verifier().verify(Some("Basic xyz")),
            Err(VerificationError::InvalidToken(
                RejectionReason::UnsupportedScheme
            ))
        );
    }

    #[test]
    fn test_malformed_headers_rejected() {
        let token = issue("alice");
        let extra = format!("Bearer {} extra", token);

        for header in ["", "Bearer", token.as_str(), extra.as_str()] {
            assert_eq!(
                verifier().verify(Some(header)),
                Err(VerificationError::InvalidToken(
                    RejectionReason::MalformedHeader
                )),
                "header {:?} accepted",
                header
            );
        }
    }

    #[test]
    fn test_expired_token_rejected() {
        let handler = JwtHandler::from_config(&config()).unwrap();
        let claims = Claims::for_subject("alice", Duration::minutes(-1));
        let token = handler.encode(&claims).unwrap();

        assert_eq!(
            verifier().verify_token(&token),
            Err(VerificationError::InvalidToken(RejectionReason::Expired))
        );
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let foreign = Authenticator::new(&JwtConfig::new("another_secret_entirely_32_bytes!!"))
            .unwrap()
            .issue_token("alice")
            .unwrap();

        assert_eq!(
            verifier().verify_token(&foreign),
            Err(VerificationError::InvalidToken(
                RejectionReason::BadSignature
            ))
        );
    }

    #[test]
    fn test_missing_subject_rejected() {
        let handler = JwtHandler::from_config(&config()).unwrap();
        let claims = Claims::new().with_expiration(Utc::now().timestamp() + 60);
        let token = handler.encode(&claims).unwrap();

        assert_eq!(
            verifier().verify_token(&token),
            Err(VerificationError::InvalidToken(
                RejectionReason::MissingSubject
            ))
        );
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert_eq!(
            verifier().verify(Some("Bearer not.a.jwt")),
            Err(VerificationError::InvalidToken(RejectionReason::Malformed))
        );
    }

    #[test]
    fn test_error_message_hides_reason() {
        let err = VerificationError::InvalidToken(RejectionReason::BadSignature);
        assert_eq!(err.to_string(), "invalid token");
    }
}
