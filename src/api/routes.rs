use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::middleware::require_auth;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Protected routes -- the bearer token must authenticate against a
    // live session before the handler runs
    let protected_routes = Router::new()
        .route("/sessions", delete(handlers::revoke_session))
        .route("/sessions/current", get(handlers::current_session))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_auth,
        ));

    // Public routes -- login happens here, after the caller's own
    // credential check; verification takes the token in the body
    let public_routes = Router::new()
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/verify", post(handlers::verify_session))
        .route("/_internal/health", get(handlers::health));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
