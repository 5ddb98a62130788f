//! Shared test helpers — available to all `#[cfg(test)]` modules in the crate.

use chrono::Utc;
use tempfile::TempDir;

use crate::auth::SessionAuthority;
use crate::config::{Config, NodeConfig, TokenConfig};
use crate::storage::models::SessionRecord;
use crate::storage::Database;

/// Signing secret used by every test codec and authority.
pub const TEST_SECRET: &str = "test-secret";

/// Open a fresh database in a temporary directory.
///
/// Returns both the `Database` and the `TempDir` guard — the caller must
/// keep the `TempDir` alive for the duration of the test.
pub fn setup_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(temp_dir.path()).unwrap();
    (db, temp_dir)
}

/// A minimal `Config` suitable for unit tests.
pub fn test_config() -> Config {
    Config {
        node: NodeConfig {
            bind_address: "127.0.0.1:8080".to_string(),
            data_dir: "/tmp/test".to_string(),
        },
        tokens: TokenConfig {
            secret: TEST_SECRET.to_string(),
            token_ttl_seconds: 3600,
        },
    }
}

/// Build a `SessionAuthority` over the given database using [`test_config`].
pub fn test_authority(db: Database) -> SessionAuthority {
    SessionAuthority::new(&test_config().tokens, db)
}

/// Create a `SessionRecord` for the given user with a fresh session id.
pub fn make_session(user_id: u64) -> SessionRecord {
    SessionRecord {
        created_at: Utc::now(),
        session_id: uuid::Uuid::new_v4().to_string(),
        user_id,
    }
}
