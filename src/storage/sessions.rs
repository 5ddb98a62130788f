use redb::ReadableTable;

use super::db::{Database, DatabaseError};
use super::models::SessionRecord;
use super::tables::*;

impl Database {
    // ========================================================================
    // Session operations
    // ========================================================================

    /// Store a session record, superseding any existing record for the user.
    ///
    /// The delete-old/insert-new pair happens inside a single write
    /// transaction, so concurrent reads observe either the previous session
    /// or the new one, never a gap. Returns the superseded record, if any.
    pub fn replace_session(
        &self,
        session: &SessionRecord,
    ) -> Result<Option<SessionRecord>, DatabaseError> {
        debug_assert!(
            !session.session_id.is_empty(),
            "session_id must not be empty"
        );

        let write_txn = self.begin_write()?;
        let previous = {
            let mut table = write_txn.open_table(SESSIONS)?;
            let data = bincode::serialize(session)?;
            let superseded = table
                .insert(session.user_id, data.as_slice())?
                .map(|guard| bincode::deserialize::<SessionRecord>(guard.value()))
                .transpose()?;
            superseded
        };
        write_txn.commit()?;
        Ok(previous)
    }

    /// Get the active session record for a user
    pub fn get_session(&self, user_id: u64) -> Result<Option<SessionRecord>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(SESSIONS)?;

        match table.get(user_id)? {
            Some(data) => {
                let session: SessionRecord = bincode::deserialize(data.value())?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    /// Delete the session record for a user, returning whether one existed
    pub fn delete_session(&self, user_id: u64) -> Result<bool, DatabaseError> {
        let write_txn = self.begin_write()?;
        let deleted = {
            let mut table = write_txn.open_table(SESSIONS)?;
            let existed = table.remove(user_id)?.is_some();
            existed
        };
        write_txn.commit()?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::{make_session, setup_db};

    #[test]
    fn test_replace_and_get_session() {
        let (db, _temp) = setup_db();

        let session = make_session(42);
        assert!(db.replace_session(&session).unwrap().is_none());

        let fetched = db.get_session(42).unwrap().unwrap();
        assert_eq!(fetched.session_id, session.session_id);
        assert_eq!(fetched.user_id, 42);
    }

    #[test]
    fn test_replace_supersedes_previous_session() {
        let (db, _temp) = setup_db();

        let first = make_session(42);
        let second = make_session(42);
        db.replace_session(&first).unwrap();

        let superseded = db.replace_session(&second).unwrap().unwrap();
        assert_eq!(superseded.session_id, first.session_id);

        // Only the new record remains
        let fetched = db.get_session(42).unwrap().unwrap();
        assert_eq!(fetched.session_id, second.session_id);
    }

    #[test]
    fn test_sessions_are_keyed_per_user() {
        let (db, _temp) = setup_db();

        let a = make_session(1);
        let b = make_session(2);
        db.replace_session(&a).unwrap();
        db.replace_session(&b).unwrap();

        assert_eq!(db.get_session(1).unwrap().unwrap().session_id, a.session_id);
        assert_eq!(db.get_session(2).unwrap().unwrap().session_id, b.session_id);
    }

    #[test]
    fn test_delete_session() {
        let (db, _temp) = setup_db();

        let session = make_session(42);
        db.replace_session(&session).unwrap();

        assert!(db.delete_session(42).unwrap());
        assert!(db.get_session(42).unwrap().is_none());

        // Deleting again is a no-op
        assert!(!db.delete_session(42).unwrap());
    }
}
