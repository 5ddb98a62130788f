use chrono::{Duration, Utc};
use thiserror::Error;

use crate::config::TokenConfig;
use crate::storage::models::SessionRecord;
use crate::storage::{Database, DatabaseError};
use crate::tokens::{Claims, TokenCodec, TokenError};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token does not carry the authorized marker")]
    NotAuthorized,
    #[error("Session has been revoked")]
    SessionRevoked,
    #[error("Session store error: {0}")]
    Store(#[from] DatabaseError),
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// The identity established by a successful authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub user_id: u64,
}

/// The stateful authority coordinating login, logout and request
/// authentication against the session-record store.
///
/// A token's signature only proves who minted it; whether it still
/// authenticates is decided here, by comparing its embedded session id
/// against the record currently stored for the user. That indirection is
/// what makes logout and login-elsewhere take effect immediately, even
/// though issued tokens stay cryptographically valid until expiry.
pub struct SessionAuthority {
    codec: TokenCodec,
    db: Database,
    token_ttl: Duration,
}

impl SessionAuthority {
    pub fn new(config: &TokenConfig, db: Database) -> Self {
        Self {
            codec: TokenCodec::new(config.secret.as_bytes()),
            db,
            token_ttl: Duration::seconds(config.token_ttl_seconds as i64),
        }
    }

    /// Create a session for the user and mint a token bound to it.
    ///
    /// Any existing session for the user is superseded in the same store
    /// transaction, revoking its outstanding token.
    pub fn login(&self, user_id: u64) -> Result<String, AuthError> {
        let record = SessionRecord {
            created_at: Utc::now(),
            session_id: uuid::Uuid::new_v4().to_string(),
            user_id,
        };

        let superseded = self.db.replace_session(&record)?;
        if let Some(old) = superseded {
            tracing::debug!(user_id, old_session_id = %old.session_id, "Superseded previous session");
        }

        let claims = Claims::new(user_id, record.session_id.clone(), self.token_ttl);
        let token = self.codec.mint(&claims)?;

        tracing::debug!(user_id, session_id = %record.session_id, "Created session");
        Ok(token)
    }

    /// Verify a presented token and confirm its session is still live.
    ///
    /// Signature and expiry checks alone are not sufficient: the embedded
    /// session id must match the stored record, which is what makes
    /// revocation effective for a stateless credential.
    pub fn authenticate(&self, token: &str) -> Result<AuthenticatedIdentity, AuthError> {
        let claims = self.codec.verify(token)?;

        if !claims.authorized {
            return Err(AuthError::NotAuthorized);
        }

        match self.db.get_session(claims.user_id)? {
            Some(record) if record.session_id == claims.session_id => Ok(AuthenticatedIdentity {
                user_id: claims.user_id,
            }),
            _ => Err(AuthError::SessionRevoked),
        }
    }

    /// Delete the user's session, if any. Idempotent: logging out a user
    /// with no active session succeeds.
    pub fn logout(&self, user_id: u64) -> Result<(), AuthError> {
        let deleted = self.db.delete_session(user_id)?;
        if deleted {
            tracing::debug!(user_id, "Revoked session");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{setup_db, test_authority, TEST_SECRET};

    #[test]
    fn test_login_token_authenticates() {
        let (db, _temp) = setup_db();
        let authority = test_authority(db);

        let token = authority.login(42).unwrap();
        let identity = authority.authenticate(&token).unwrap();
        assert_eq!(identity.user_id, 42);
    }

    #[test]
    fn test_logout_revokes_outstanding_token() {
        let (db, _temp) = setup_db();
        let authority = test_authority(db);

        let token = authority.login(42).unwrap();
        authority.logout(42).unwrap();

        // The token still verifies cryptographically...
        let codec = TokenCodec::new(TEST_SECRET.as_bytes());
        assert!(codec.verify(&token).is_ok());

        // ...but no longer authenticates
        assert!(matches!(
            authority.authenticate(&token),
            Err(AuthError::SessionRevoked)
        ));
    }

    #[test]
    fn test_relogin_supersedes_previous_token() {
        let (db, _temp) = setup_db();
        let authority = test_authority(db);

        let first = authority.login(42).unwrap();
        let second = authority.login(42).unwrap();

        assert!(matches!(
            authority.authenticate(&first),
            Err(AuthError::SessionRevoked)
        ));
        assert_eq!(authority.authenticate(&second).unwrap().user_id, 42);
    }

    #[test]
    fn test_expired_token_fails_independent_of_session_state() {
        let (db, _temp) = setup_db();
        let authority = test_authority(db);

        // Live session, but a hand-built token whose exp is in the past
        authority.login(42).unwrap();
        let session_id = authority.db.get_session(42).unwrap().unwrap().session_id;

        let codec = TokenCodec::new(TEST_SECRET.as_bytes());
        let claims = Claims::new(42, session_id, Duration::hours(-1));
        let stale = codec.mint(&claims).unwrap();

        assert!(matches!(
            authority.authenticate(&stale),
            Err(AuthError::Token(TokenError::Expired))
        ));
    }

    #[test]
    fn test_foreign_secret_fails() {
        let (db, _temp) = setup_db();
        let authority = test_authority(db);

        authority.login(42).unwrap();

        let forger = TokenCodec::new(b"not-the-server-secret");
        let claims = Claims::new(42, "guessed".to_string(), Duration::hours(1));
        let forged = forger.mint(&claims).unwrap();

        assert!(matches!(
            authority.authenticate(&forged),
            Err(AuthError::Token(TokenError::InvalidSignature))
        ));
    }

    #[test]
    fn test_unauthorized_claim_class_fails() {
        let (db, _temp) = setup_db();
        let authority = test_authority(db);

        authority.login(42).unwrap();
        let session_id = authority.db.get_session(42).unwrap().unwrap().session_id;

        let codec = TokenCodec::new(TEST_SECRET.as_bytes());
        let mut claims = Claims::new(42, session_id, Duration::hours(1));
        claims.authorized = false;
        let token = codec.mint(&claims).unwrap();

        assert!(matches!(
            authority.authenticate(&token),
            Err(AuthError::NotAuthorized)
        ));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let (db, _temp) = setup_db();
        let authority = test_authority(db);

        // No session at all
        authority.logout(7).unwrap();

        authority.login(7).unwrap();
        authority.logout(7).unwrap();
        authority.logout(7).unwrap();
    }
}
