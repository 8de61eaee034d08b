//! Collection stores.
//!
//! One store per persisted collection, each the single writer for its
//! [`crate::storage::StorageKey`]. Stores hold the authoritative in-memory
//! state, enforce the domain invariants, and re-persist after every
//! successful mutation. They know nothing about pages or rendering.

pub mod cart;
pub mod chat;
pub mod session;

pub use cart::{AddToCart, CartStore, CartTotals};
pub use chat::ChatStore;
pub use session::SessionStore;
