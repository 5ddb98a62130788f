use redb::TableDefinition;

/// Active sessions: user_id -> SessionRecord (bincode).
///
/// Keyed by user id, so at most one record can exist per user and a
/// login's insert atomically supersedes the previous session.
pub const SESSIONS: TableDefinition<u64, &[u8]> = TableDefinition::new("sessions");
