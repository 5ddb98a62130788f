use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::auth_failure;
use crate::api::response::{ApiError, AppJson, JSend};
use crate::auth::AuthenticatedIdentity;
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateSessionRequest {
    pub user_id: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifySessionRequest {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub user_id: u64,
}

// ============================================================================
// Handlers
// ============================================================================

/// Log a user in: create (or supersede) their session and mint a token.
///
/// The caller is trusted to have verified the user's credentials already;
/// this service only manages the session and the token bound to it.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CreateSessionRequest>,
) -> Result<Json<JSend<CreateSessionResponse>>, ApiError> {
    if req.user_id == 0 {
        return Err(ApiError::bad_request("user_id is required"));
    }

    let token = state.authority.login(req.user_id).map_err(auth_failure)?;

    Ok(JSend::success(CreateSessionResponse { token }))
}

/// Authenticate a presented token, returning the identity it establishes.
pub async fn verify_session(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<VerifySessionRequest>,
) -> Result<Json<JSend<IdentityResponse>>, ApiError> {
    if req.token.trim().is_empty() {
        return Err(ApiError::bad_request("token is required"));
    }

    let identity = state
        .authority
        .authenticate(&req.token)
        .map_err(auth_failure)?;

    Ok(JSend::success(IdentityResponse {
        user_id: identity.user_id,
    }))
}

/// Return the identity established by the bearer token.
pub async fn current_session(
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Json<JSend<IdentityResponse>> {
    JSend::success(IdentityResponse {
        user_id: identity.user_id,
    })
}

/// Log the bearer out, revoking their outstanding token immediately.
pub async fn revoke_session(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Result<Json<JSend<()>>, ApiError> {
    state
        .authority
        .logout(identity.user_id)
        .map_err(auth_failure)?;

    Ok(JSend::success(()))
}
