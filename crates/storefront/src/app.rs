//! Application state shared across pages and commands.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chouette_core::{CourseId, MessageId};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::bot;
use crate::config::StorefrontConfig;
use crate::error::ValidationError;
use crate::events::{EventBus, StoreEvent};
use crate::models::{CartItem, ChatMessage, Session};
use crate::storage::{FileBackend, Storage, StorageError};
use crate::stores::{AddToCart, CartStore, CartTotals, ChatStore, SessionStore};

/// Receipt for a sent chat message.
///
/// `reply` is the scheduled assistant answer. Dropping the handle detaches
/// the reply (it still fires), aborting it cancels the reply outright.
pub struct SentMessage {
    pub id: MessageId,
    pub reply: JoinHandle<()>,
}

/// Application state shared across all pages.
///
/// This struct is cheaply cloneable via `Arc`. The stores behind it are the
/// single owners of their records; everything else reads snapshots and
/// listens on the event bus.
#[derive(Clone)]
pub struct App {
    inner: Arc<AppInner>,
}

struct AppInner {
    config: StorefrontConfig,
    cart: Mutex<CartStore>,
    chat: Mutex<ChatStore>,
    session: Mutex<SessionStore>,
    events: EventBus,
}

impl App {
    /// Create the application over file storage under `config.state_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the state directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorageError> {
        let backend = FileBackend::new(config.state_dir.clone())?;
        Ok(Self::with_storage(config, Storage::new(backend)))
    }

    /// Create the application over an explicit storage facade.
    #[must_use]
    pub fn with_storage(config: StorefrontConfig, storage: Storage) -> Self {
        let cart = CartStore::load(storage.clone());
        let chat = ChatStore::load(storage.clone());
        let session = SessionStore::load(storage);

        Self {
            inner: Arc::new(AppInner {
                config,
                cart: Mutex::new(cart),
                chat: Mutex::new(chat),
                session: Mutex::new(session),
                events: EventBus::new(),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Listen for store changes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events.subscribe()
    }

    // ========================================================================
    // Cart
    // ========================================================================

    /// Add a course to the cart and flash the usual confirmation.
    ///
    /// # Errors
    ///
    /// Propagates the cart's validation errors; nothing is published then.
    pub fn add_to_cart(&self, request: AddToCart) -> Result<(), ValidationError> {
        let notice = {
            let mut cart = self.cart();
            let id = request.id.clone();
            cart.add(request)?;
            cart.items()
                .iter()
                .find(|item| item.id == id)
                .map(StoreEvent::added_to_cart)
        };

        self.inner.events.publish(StoreEvent::CartUpdated);
        if let Some(notice) = notice {
            self.inner.events.publish(notice);
        }
        Ok(())
    }

    /// Bump the quantity of a line. Returns whether anything changed.
    pub fn increment_cart_item(&self, id: &CourseId) -> bool {
        let changed = self.cart().increment(id);
        if changed {
            self.inner.events.publish(StoreEvent::CartUpdated);
        }
        changed
    }

    /// Lower the quantity of a line, removing it at one.
    pub fn decrement_cart_item(&self, id: &CourseId) -> bool {
        let changed = self.cart().decrement(id);
        if changed {
            self.inner.events.publish(StoreEvent::CartUpdated);
        }
        changed
    }

    /// Remove a line wholesale, whatever its quantity.
    pub fn remove_from_cart(&self, id: &CourseId) -> bool {
        let changed = self.cart().remove(id, true);
        if changed {
            self.inner.events.publish(StoreEvent::CartUpdated);
        }
        changed
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.cart().clear();
        self.inner.events.publish(StoreEvent::CartUpdated);
    }

    #[must_use]
    pub fn cart_items(&self) -> Vec<CartItem> {
        self.cart().items().to_vec()
    }

    #[must_use]
    pub fn cart_totals(&self) -> CartTotals {
        self.cart().totals()
    }

    // ========================================================================
    // Chat
    // ========================================================================

    /// Send a visitor message and schedule the assistant's reply.
    ///
    /// The reply lands after a randomized pause within the configured window
    /// and is published as [`StoreEvent::ChatUpdated`] when it does.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyMessage`] for blank content; nothing
    /// is stored or scheduled then.
    pub fn send_message(&self, content: &str) -> Result<SentMessage, ValidationError> {
        let author = self.session().chat_author();
        let id = self.chat().send(content, author)?;
        self.inner.events.publish(StoreEvent::ChatUpdated);

        let text = content.trim().to_owned();
        let app = self.clone();
        let reply = tokio::spawn(async move {
            let delay = {
                let mut rng = rand::rng();
                bot::reply_delay(
                    &mut rng,
                    app.inner.config.reply_delay_min,
                    app.inner.config.reply_delay_max,
                )
            };
            tokio::time::sleep(delay).await;

            let reply = {
                let mut rng = rand::rng();
                bot::compose_reply(&text, &mut rng)
            };
            app.chat().append_inbound(reply);
            app.inner.events.publish(StoreEvent::ChatUpdated);
        });

        Ok(SentMessage { id, reply })
    }

    /// Schedule the welcome message for an empty transcript.
    ///
    /// Returns `None` when the transcript already has messages. Emptiness is
    /// checked again when the timer fires, so a visitor who types first is
    /// not greeted out of order.
    pub fn schedule_welcome(&self) -> Option<JoinHandle<()>> {
        if !self.chat().is_empty() {
            return None;
        }

        let app = self.clone();
        Some(tokio::spawn(async move {
            tokio::time::sleep(app.inner.config.welcome_delay).await;

            let mut chat = app.chat();
            if chat.is_empty() {
                chat.append_inbound(bot::WELCOME);
                drop(chat);
                app.inner.events.publish(StoreEvent::ChatUpdated);
            }
        }))
    }

    /// Wipe the transcript. Confirmation is the caller's business.
    pub fn clear_chat(&self) {
        self.chat().clear();
        self.inner.events.publish(StoreEvent::ChatUpdated);
    }

    #[must_use]
    pub fn chat_messages(&self) -> Vec<ChatMessage> {
        self.chat().messages().to_vec()
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Log in and persist the session.
    ///
    /// # Errors
    ///
    /// Propagates the session store's validation errors; nothing is
    /// published then.
    pub fn login(&self, email: &str, password: &str) -> Result<Session, ValidationError> {
        let session = self.session().login(email, password)?;
        self.inner.events.publish(StoreEvent::SessionUpdated);
        Ok(session)
    }

    /// Log out and drop the stored session.
    pub fn logout(&self) {
        self.session().logout();
        self.inner.events.publish(StoreEvent::SessionUpdated);
    }

    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        self.session().current().cloned()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session().is_logged_in()
    }

    // Locks are held for single store calls only, never across an await.

    fn cart(&self) -> MutexGuard<'_, CartStore> {
        self.inner.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn chat(&self) -> MutexGuard<'_, ChatStore> {
        self.inner.chat.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn session(&self) -> MutexGuard<'_, SessionStore> {
        self.inner.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chouette_core::Price;
    use tokio::sync::broadcast::error::TryRecvError;

    use crate::models::Direction;
    use crate::storage::MemoryBackend;

    use super::*;

    fn test_app() -> App {
        App::with_storage(
            StorefrontConfig::default(),
            Storage::new(MemoryBackend::new()),
        )
    }

    fn python_request() -> AddToCart {
        AddToCart {
            id: CourseId::new("python"),
            name: "Python : les fondamentaux".to_owned(),
            price: Price::from_cents(4999),
            image: None,
            author: None,
        }
    }

    #[tokio::test]
    async fn test_add_publishes_update_and_notice() {
        let app = test_app();
        let mut rx = app.subscribe();

        app.add_to_cart(python_request()).unwrap();

        assert_eq!(rx.recv().await.unwrap(), StoreEvent::CartUpdated);
        assert_eq!(
            rx.recv().await.unwrap(),
            StoreEvent::NoticePosted {
                text: "\"Python : les fondamentaux\" ajouté au panier !".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn test_mutations_that_change_nothing_publish_nothing() {
        let app = test_app();
        let mut rx = app.subscribe();

        assert!(!app.increment_cart_item(&CourseId::new("absent")));
        assert!(!app.decrement_cart_item(&CourseId::new("absent")));
        assert!(!app.remove_from_cart(&CourseId::new("absent")));

        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sent_message_gets_a_delayed_reply() {
        let app = test_app();
        let sent = app.send_message("Quels sont vos prix ?").unwrap();

        assert_eq!(app.chat_messages().len(), 1);
        sent.reply.await.unwrap();

        let messages = app.chat_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].direction, Direction::Inbound);
        assert!(messages[1].content.contains("29,99 €"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_authored_by_member_when_logged_in() {
        let app = test_app();
        app.login("123", "123").unwrap();

        let sent = app.send_message("Bonjour").unwrap();
        sent.reply.abort();

        assert_eq!(app.chat_messages()[0].author.name, "Étudiant Chouette");
    }

    #[tokio::test(start_paused = true)]
    async fn test_welcome_lands_on_an_empty_transcript() {
        let app = test_app();

        let welcome = app.schedule_welcome().unwrap();
        welcome.await.unwrap();

        let messages = app.chat_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, bot::WELCOME);
    }

    #[tokio::test(start_paused = true)]
    async fn test_welcome_not_scheduled_for_a_running_conversation() {
        let app = test_app();
        let sent = app.send_message("Bonjour").unwrap();
        sent.reply.abort();

        assert!(app.schedule_welcome().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_welcome_skipped_when_a_message_arrives_first() {
        let app = test_app();
        let welcome = app.schedule_welcome().unwrap();

        let sent = app.send_message("Bonjour").unwrap();
        welcome.await.unwrap();

        let messages = app.chat_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].direction, Direction::Outbound);
        sent.reply.abort();
    }

    #[tokio::test]
    async fn test_login_and_logout_publish_session_updates() {
        let app = test_app();
        let mut rx = app.subscribe();

        app.login("a@b.fr", "abcd").unwrap();
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::SessionUpdated);

        app.logout();
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::SessionUpdated);
        assert!(!app.is_logged_in());
    }
}
