/// All entity identifiers are random UUIDs generated by the core.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh entity identifier.
pub fn new_id() -> EntityId {
    uuid::Uuid::new_v4()
}

/// Current wall-clock time used for registration, open, and intake stamps.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}
