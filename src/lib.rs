//! session-authority - A small revocable session-token service
//!
//! This crate issues signed, time-limited bearer tokens bound to a
//! per-login session identifier and validates them on every protected
//! request, with:
//! - JWT (HS256) tokens carrying the session id as a revocation handle
//! - Single active session per user (a new login supersedes the old one)
//! - Immediate server-side revocation on logout, before token expiry
//! - redb embedded database (ACID, MVCC, crash-safe)
//! - REST API

pub mod api;
pub mod auth;
pub mod config;
pub mod storage;
#[cfg(test)]
pub mod testutil;
pub mod tokens;

use auth::SessionAuthority;
use config::Config;

/// Shared application state
pub struct AppState {
    pub authority: SessionAuthority,
    pub config: Config,
}
