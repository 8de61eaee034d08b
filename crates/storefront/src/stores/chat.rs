//! The chat transcript store.

use chouette_core::MessageId;
use chrono::Utc;

use crate::error::ValidationError;
use crate::models::{ChatAuthor, ChatMessage, ChatRecord, Direction};
use crate::storage::{Storage, StorageKey};

/// The transcript collection: owner of `chouette_learning_chat`.
///
/// Append-only between clears. Message ids are send instants in Unix
/// milliseconds, bumped past the newest existing id when two appends land in
/// the same millisecond, so ids stay unique and strictly increasing.
pub struct ChatStore {
    storage: Storage,
    record: ChatRecord,
}

impl ChatStore {
    /// Load the transcript from storage. Missing or unreadable records are an
    /// empty transcript.
    #[must_use]
    pub fn load(storage: Storage) -> Self {
        let record = storage
            .load_json::<ChatRecord>(StorageKey::Chat)
            .unwrap_or_else(ChatRecord::empty);
        Self { storage, record }
    }

    /// Messages in send order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.record.messages
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record.messages.is_empty()
    }

    /// Id of the newest message, if any.
    #[must_use]
    pub fn newest_id(&self) -> Option<MessageId> {
        self.record.messages.last().map(|m| m.id)
    }

    /// Append an outbound message from the visitor.
    ///
    /// The content is trimmed before anything else happens.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyMessage`] if nothing is left after
    /// trimming; the transcript and storage are untouched.
    pub fn send(&mut self, content: &str, author: ChatAuthor) -> Result<MessageId, ValidationError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(self.append(trimmed.to_owned(), author, Direction::Outbound))
    }

    /// Append an inbound message from the assistant.
    pub fn append_inbound(&mut self, content: impl Into<String>) -> MessageId {
        self.append(content.into(), ChatAuthor::bot(), Direction::Inbound)
    }

    /// Drop the whole history and its stored record.
    ///
    /// Destructive; whoever calls this is responsible for having asked the
    /// visitor first.
    pub fn clear(&mut self) {
        self.record.messages.clear();
        self.storage.remove(StorageKey::Chat);
    }

    fn append(&mut self, content: String, author: ChatAuthor, direction: Direction) -> MessageId {
        let now = Utc::now();
        let id = self.next_id(now.timestamp_millis());
        self.record.messages.push(ChatMessage {
            id,
            content,
            timestamp: now,
            author,
            direction,
        });
        self.persist();
        id
    }

    fn next_id(&self, now_millis: i64) -> MessageId {
        let floor = self
            .record
            .messages
            .last()
            .map_or(i64::MIN, |m| m.id.as_i64().saturating_add(1));
        MessageId::new(now_millis.max(floor))
    }

    fn persist(&self) {
        self.storage.store_json(StorageKey::Chat, &self.record);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use crate::storage::{MemoryBackend, StorageBackend};

    use super::*;

    fn store_with_backend() -> (ChatStore, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        let store = ChatStore::load(Storage::new(Arc::clone(&backend)));
        (store, backend)
    }

    #[test]
    fn test_send_trims_content() {
        let (mut store, _backend) = store_with_backend();
        store.send("  Bonjour  \n", ChatAuthor::guest()).unwrap();

        assert_eq!(store.messages()[0].content, "Bonjour");
        assert_eq!(store.messages()[0].direction, Direction::Outbound);
    }

    #[test]
    fn test_send_rejects_blank_without_persisting() {
        let (mut store, backend) = store_with_backend();
        let result = store.send("   \t ", ChatAuthor::guest());

        assert!(matches!(result, Err(ValidationError::EmptyMessage)));
        assert!(store.is_empty());
        assert!(backend.snapshot(StorageKey::Chat).is_none());
    }

    #[test]
    fn test_ids_are_strictly_increasing_within_one_millisecond() {
        let (mut store, _backend) = store_with_backend();
        for _ in 0..5 {
            store.send("tick", ChatAuthor::guest()).unwrap();
        }

        let ids: Vec<i64> = store.messages().iter().map(|m| m.id.as_i64()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {ids:?}");
    }

    #[test]
    fn test_append_inbound_is_from_the_bot() {
        let (mut store, _backend) = store_with_backend();
        store.append_inbound("Bonjour !");

        let message = &store.messages()[0];
        assert_eq!(message.direction, Direction::Inbound);
        assert_eq!(message.author, ChatAuthor::bot());
    }

    #[test]
    fn test_newest_id_tracks_last_append() {
        let (mut store, _backend) = store_with_backend();
        assert!(store.newest_id().is_none());

        store.send("un", ChatAuthor::guest()).unwrap();
        let second = store.send("deux", ChatAuthor::guest()).unwrap();
        assert_eq!(store.newest_id(), Some(second));
    }

    #[test]
    fn test_clear_removes_the_stored_record() {
        let (mut store, backend) = store_with_backend();
        store.send("Bonjour", ChatAuthor::guest()).unwrap();
        assert!(backend.snapshot(StorageKey::Chat).is_some());

        store.clear();
        assert!(store.is_empty());
        assert!(backend.snapshot(StorageKey::Chat).is_none());
    }

    #[test]
    fn test_reload_sees_persisted_transcript() {
        let backend = Arc::new(MemoryBackend::new());
        {
            let mut store = ChatStore::load(Storage::new(Arc::clone(&backend)));
            store.send("Bonjour", ChatAuthor::guest()).unwrap();
            store.append_inbound("Bonjour ! Comment puis-je vous aider aujourd'hui ? 😊");
        }

        let reloaded = ChatStore::load(Storage::new(Arc::clone(&backend)));
        assert_eq!(reloaded.messages().len(), 2);
        assert_eq!(reloaded.messages()[1].direction, Direction::Inbound);
    }

    #[test]
    fn test_unreadable_record_loads_as_empty() {
        let backend = Arc::new(MemoryBackend::new());
        backend.write(StorageKey::Chat, "[1,2,3]").unwrap();

        let store = ChatStore::load(Storage::new(Arc::clone(&backend)));
        assert!(store.is_empty());
    }
}
