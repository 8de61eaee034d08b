//! Change notifications between stores and live pages.
//!
//! Stores publish after every successful mutation; whichever page is mounted
//! refreshes its regions in response. Publishing with nobody listening is
//! normal (headless runs, tests that only inspect state).

use tokio::sync::broadcast;

use crate::models::CartItem;

/// Something a store changed.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The cart record changed (add, increment, decrement, remove, clear).
    CartUpdated,

    /// A message was appended to or cleared from the transcript.
    ChatUpdated,

    /// Someone logged in or out.
    SessionUpdated,

    /// A transient confirmation to flash at the visitor.
    NoticePosted {
        /// French text, already user-facing.
        text: String,
    },
}

impl StoreEvent {
    /// The standard confirmation shown after an add to cart.
    #[must_use]
    pub fn added_to_cart(item: &CartItem) -> Self {
        Self::NoticePosted {
            text: format!("\"{}\" ajouté au panier !", item.name),
        }
    }
}

/// Broadcast fan-out for [`StoreEvent`]s.
pub struct EventBus {
    tx: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self { tx }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, event: StoreEvent) {
        // No receivers is fine; the event is simply dropped.
        let _ = self.tx.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
