//! Integration tests for the Chouette Learning storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p chouette-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart persistence, migration and totals across reloads
//! - `chat_flow` - Timed assistant behavior on the paused Tokio clock
//! - `session_flow` - Login, logout and their effect on the other stores
//!
//! Most flows run on the in-memory backend so a test can hold the backend
//! and inspect the raw persisted JSON; file persistence runs in a temporary
//! directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use chouette_core::CourseId;
use chouette_storefront::app::App;
use chouette_storefront::catalog;
use chouette_storefront::config::StorefrontConfig;
use chouette_storefront::storage::{MemoryBackend, Storage};
use chouette_storefront::stores::AddToCart;

/// An application over a fresh in-memory backend, plus the backend itself
/// for raw blob assertions.
#[must_use]
pub fn memory_app() -> (App, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let app = app_over(&backend);
    (app, backend)
}

/// A second (or later) application over the same backend, as if the visitor
/// came back.
#[must_use]
pub fn app_over(backend: &Arc<MemoryBackend>) -> App {
    App::with_storage(
        StorefrontConfig::default(),
        Storage::new(Arc::clone(backend)),
    )
}

/// An add-to-cart request for a catalog course.
///
/// # Panics
///
/// Panics when the id is not in the catalog; tests only.
#[must_use]
pub fn course_request(id: &str) -> AddToCart {
    let course = catalog::find(&CourseId::new(id)).expect("course in catalog");
    AddToCart::from(course)
}
