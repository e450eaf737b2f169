/// All database primary keys are PostgreSQL BIGSERIAL, except session ids
/// which are random 64-char hex strings minted at login.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
