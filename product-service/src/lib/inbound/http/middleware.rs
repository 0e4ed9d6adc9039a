use auth::RejectionReason;
use auth::VerificationError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified token subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub subject: String,
}

/// Guard for protected routes: verifies the bearer token before the handler runs
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = match req.headers().get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| {
            reject(VerificationError::InvalidToken(
                RejectionReason::MalformedHeader,
            ))
        })?),
        None => None,
    };

    let subject = state.token_verifier.verify(authorization).map_err(reject)?;

    req.extensions_mut().insert(AuthenticatedUser { subject });

    Ok(next.run(req).await)
}

fn reject(err: VerificationError) -> ApiError {
    if let VerificationError::InvalidToken(reason) = err {
        tracing::debug!(%reason, "Token rejected");
    }
    ApiError::Unauthorized(err.to_string())
}
