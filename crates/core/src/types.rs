//! Shared type aliases and identifier parsing.

use crate::error::CoreError;

/// Category identifiers are UUIDs (v4, generated at creation).
pub type CategoryId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a raw identifier string into a [`CategoryId`].
///
/// Structural validation happens here, before any repository lookup;
/// a malformed string yields [`CoreError::InvalidId`].
pub fn parse_category_id(raw: &str) -> Result<CategoryId, CoreError> {
    uuid::Uuid::parse_str(raw).map_err(|_| CoreError::InvalidId)
}
