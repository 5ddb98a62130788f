mod health;
mod sessions;

use crate::api::response::ApiError;
use crate::auth::AuthError;
use crate::tokens::TokenError;

pub use health::health;
pub use sessions::{create_session, current_session, revoke_session, verify_session};

/// Map an authentication failure to its boundary response.
///
/// Every authentication-outcome kind collapses to the same 401 body; only
/// a store failure is surfaced distinctly (503, transient). The kinds stay
/// distinguishable in the logs.
pub(super) fn auth_failure(err: AuthError) -> ApiError {
    match err {
        AuthError::Store(e) => {
            tracing::error!(error = %e, "Session store unavailable, denying access");
            ApiError::unavailable("Session store unavailable")
        }
        AuthError::Token(TokenError::InvalidSignature) => {
            tracing::warn!("Rejected token with bad signature or algorithm");
            ApiError::unauthorized()
        }
        AuthError::Token(TokenError::Signing(e)) => {
            tracing::error!(error = %e, "Token signing failed");
            ApiError::internal("Token signing failed")
        }
        AuthError::Token(TokenError::Expired) => {
            tracing::debug!("Rejected expired token");
            ApiError::unauthorized()
        }
        AuthError::Token(TokenError::Malformed) => {
            tracing::debug!("Rejected malformed token");
            ApiError::unauthorized()
        }
        AuthError::NotAuthorized => {
            tracing::debug!("Rejected token without the authorized marker");
            ApiError::unauthorized()
        }
        AuthError::SessionRevoked => {
            tracing::debug!("Rejected token for a revoked session");
            ApiError::unauthorized()
        }
    }
}
