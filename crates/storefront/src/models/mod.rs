//! Persisted domain models.
//!
//! These are the record shapes that actually hit storage, so their serde
//! output is part of the on-disk contract. Shape changes belong in
//! [`crate::migrate`], not here.

pub mod cart;
pub mod chat;
pub mod session;

pub use cart::{CART_SCHEMA_VERSION, CartItem, CartRecord};
pub use chat::{CHAT_SCHEMA_VERSION, ChatAuthor, ChatMessage, ChatRecord, Direction};
pub use session::Session;
