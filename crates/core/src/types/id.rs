//! Newtype IDs for type-safe entity references.
//!
//! Course identifiers are human-readable slugs (`"python"`, `"react"`), so
//! `CourseId` wraps a `String` rather than a numeric key. Chat message
//! identifiers are millisecond timestamps made strictly monotonic by the chat
//! store, so `MessageId` wraps an `i64`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a course in the catalog.
///
/// Serializes transparently as its slug, which is the form persisted in cart
/// records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Create a course ID from a slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseId {
    fn from(slug: &str) -> Self {
        Self(slug.to_owned())
    }
}

impl From<String> for CourseId {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

/// Identifier of a chat message.
///
/// Derived from the send instant in Unix milliseconds; the chat store bumps
/// the value when two sends land in the same millisecond, so ids are unique
/// and strictly increasing within one history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(i64);

impl MessageId {
    /// Create a message ID from a millisecond value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MessageId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<MessageId> for i64 {
    fn from(id: MessageId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_serializes_as_bare_slug() {
        let id = CourseId::new("python");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"python\"");

        let back: CourseId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_message_id_serializes_as_bare_integer() {
        let id = MessageId::new(1_724_580_000_123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "1724580000123");

        let back: MessageId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_message_id_ordering_follows_value() {
        assert!(MessageId::new(1) < MessageId::new(2));
    }
}
