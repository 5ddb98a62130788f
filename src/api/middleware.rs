//! Bearer-authentication middleware
//!
//! Applied to protected routes. Extracts the bearer credential, asks the
//! session authority to authenticate it, and either injects the resulting
//! identity into request extensions or rejects the request before the
//! handler runs.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, Response, Uri},
    middleware::Next,
    response::IntoResponse,
};
use std::sync::Arc;

use super::handlers::auth_failure;
use crate::api::response::ApiError;
use crate::AppState;

/// Middleware that rejects requests whose bearer token does not
/// authenticate against a live session.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let credential = extract_bearer(request.uri(), request.headers());

    let token = match credential {
        Some(token) => token,
        None => return ApiError::unauthorized().into_response(),
    };

    match state.authority.authenticate(&token) {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(err) => auth_failure(err).into_response(),
    }
}

/// Extract the bearer credential from a request.
///
/// An `Authorization` header takes precedence over the `token` query
/// parameter. A header that is present but malformed (wrong scheme, or not
/// exactly two space-separated parts) yields no credential at all rather
/// than falling back to the query parameter.
pub fn extract_bearer(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        let raw = value.to_str().ok()?;
        let parts: Vec<&str> = raw.split(' ').collect();
        if parts.len() == 2 && parts[0] == "Bearer" && !parts[1].is_empty() {
            return Some(parts[1].to_string());
        }
        return None;
    }

    uri.query()?
        .split('&')
        .find_map(|pair| pair.strip_prefix("token="))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}
