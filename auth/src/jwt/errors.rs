use thiserror::Error;

/// Failures while signing, decoding or configuring access tokens.
///
/// Messages may carry `jsonwebtoken` detail and are meant for logs, not clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("could not sign access token: {0}")]
    EncodingFailed(String),

    #[error("malformed access token: {0}")]
    DecodingFailed(String),

    #[error("access token expired")]
    TokenExpired,

    #[error("access token rejected: {0}")]
    InvalidToken(String),

    #[error("access token lacks the `{0}` claim")]
    MissingClaim(String),

    #[error("bad token settings: {0}")]
    InvalidConfiguration(String),
}
