//! Chat transcript record as persisted.

use chouette_core::MessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema version written by this build.
pub const CHAT_SCHEMA_VERSION: u32 = 1;

/// Which side of the conversation a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Sent by the person using the storefront.
    Outbound,
    /// Produced by the assistant.
    Inbound,
}

/// Display identity attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAuthor {
    pub name: String,
    pub avatar: String,
    pub id: String,
}

impl ChatAuthor {
    /// The assistant.
    #[must_use]
    pub fn bot() -> Self {
        Self {
            name: "Assistant Chouette".to_owned(),
            avatar: "🦉".to_owned(),
            id: "bot".to_owned(),
        }
    }

    /// A visitor who has not logged in.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            name: "Invité".to_owned(),
            avatar: "👤".to_owned(),
            id: "user".to_owned(),
        }
    }

    /// A logged-in member, shown under their display name. The avatar is the
    /// first letter of that name, or the guest silhouette if it is empty.
    #[must_use]
    pub fn member(display_name: &str) -> Self {
        let avatar = display_name
            .chars()
            .next()
            .map_or_else(|| "👤".to_owned(), |c| c.to_uppercase().to_string());
        Self {
            name: display_name.to_owned(),
            avatar,
            id: "user".to_owned(),
        }
    }
}

/// One message in the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub author: ChatAuthor,
    pub direction: Direction,
}

/// The versioned transcript envelope. Append-only between clears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub version: u32,
    pub messages: Vec<ChatMessage>,
}

impl ChatRecord {
    /// An empty transcript at the current schema version.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            version: CHAT_SCHEMA_VERSION,
            messages: Vec::new(),
        }
    }
}

impl Default for ChatRecord {
    fn default() -> Self {
        Self::empty()
    }
}
