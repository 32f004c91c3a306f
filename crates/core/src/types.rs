/// Form primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Identity provider subject that owns a form. Opaque to this service.
pub type OwnerId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
