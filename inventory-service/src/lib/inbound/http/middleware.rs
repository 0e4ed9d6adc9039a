use auth::RejectionReason;
use auth::VerificationError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Verified token subject, available to handlers for auditing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub subject: String,
}

/// Rejects the request with 401 unless it carries a valid bearer token
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req.headers().get(AUTHORIZATION);
    let authorization = header
        .map(|value| value.to_str())
        .transpose()
        .map_err(|_| {
            unauthorized(VerificationError::InvalidToken(
                RejectionReason::MalformedHeader,
            ))
        })?;

    let subject = state
        .token_verifier
        .verify(authorization)
        .map_err(unauthorized)?;

    req.extensions_mut().insert(AuthenticatedUser { subject });

    Ok(next.run(req).await)
}

fn unauthorized(err: VerificationError) -> ApiError {
    match err {
        VerificationError::MissingToken => tracing::debug!("Request without token"),
        VerificationError::InvalidToken(reason) => tracing::debug!(%reason, "Token rejected"),
    }
    ApiError::Unauthorized(err.to_string())
}
