use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// The signed token payload.
///
/// `session_id` is the revocation handle: a token authenticates only
/// while it matches the session record currently stored for `user_id`,
/// so deleting or replacing that record invalidates the token before
/// its `exp` is reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Marker for the "authorized" token class, set at mint time
    pub authorized: bool,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
    /// Session identifier this token is bound to
    pub session_id: String,
    /// Numeric user identity
    pub user_id: u64,
}

impl Claims {
    /// Build an authorized claim set expiring `ttl` from now
    pub fn new(user_id: u64, session_id: String, ttl: Duration) -> Self {
        Self {
            authorized: true,
            exp: (Utc::now() + ttl).timestamp(),
            session_id,
            user_id,
        }
    }
}
