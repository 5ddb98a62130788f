use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One active login session.
///
/// A token authenticates only while its embedded session id matches the
/// `session_id` stored here for its user. Deleting the record (logout) or
/// replacing it (a later login) revokes every previously issued token for
/// that user, regardless of the token's own expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// When the session was created
    pub created_at: DateTime<Utc>,
    /// Opaque unique identifier, generated fresh on each login (UUID v4)
    pub session_id: String,
    /// The authenticated principal
    pub user_id: u64,
}
