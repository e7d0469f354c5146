/// Characters are keyed by application-assigned strings (`char_xxxxx`),
/// never by database-generated ids.
pub type CharacterId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
