/// All entity identifiers are UUIDs, generated server-side at insert.
pub type WidgetId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
