//! The shopping cart store.

use chouette_core::{CourseId, Price};
use rust_decimal::Decimal;

use crate::catalog::{self, Course};
use crate::error::ValidationError;
use crate::migrate::{StoredCart, migrate_cart};
use crate::models::{CartItem, CartRecord};
use crate::storage::{Storage, StorageKey};

/// Input for [`CartStore::add`].
///
/// Carries what a course tile knows about itself. The price arrives already
/// parsed; unparseable or negative input never gets this far.
#[derive(Debug, Clone)]
pub struct AddToCart {
    pub id: CourseId,
    pub name: String,
    pub price: Price,
    pub image: Option<String>,
    pub author: Option<String>,
}

impl From<&Course> for AddToCart {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            price: course.price,
            image: None,
            author: None,
        }
    }
}

/// Money summary of the cart.
///
/// Exact decimals; turning these into `"30.60 €"` strings is the rendering
/// layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartTotals {
    pub subtotal: Decimal,
    /// 20% TVA on the subtotal.
    pub tax: Decimal,
    pub total: Decimal,
}

/// The cart collection: owner of `chouette_learning_cart`.
pub struct CartStore {
    storage: Storage,
    record: CartRecord,
}

impl CartStore {
    /// Load the cart from storage, migrating records written by older
    /// releases. A missing or unreadable record is an empty cart.
    ///
    /// Migration re-persists at most once, and only when the stored shape
    /// actually changed.
    #[must_use]
    pub fn load(storage: Storage) -> Self {
        let record = match storage.load_json::<StoredCart>(StorageKey::Cart) {
            Some(stored) => {
                let migrated = migrate_cart(stored);
                if migrated.changed {
                    storage.store_json(StorageKey::Cart, &migrated.record);
                    tracing::info!(
                        "migrated cart record to schema version {}",
                        migrated.record.version
                    );
                }
                migrated.record
            }
            None => CartRecord::empty(),
        };
        Self { storage, record }
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.record.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record.items.is_empty()
    }

    /// Add one unit of a course.
    ///
    /// A course already in the cart has its quantity bumped; a new course is
    /// appended with quantity 1 and catalog metadata (generic defaults for
    /// ids the catalog does not know).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositivePrice`] for a zero price. In
    /// that case nothing was mutated or persisted.
    pub fn add(&mut self, request: AddToCart) -> Result<(), ValidationError> {
        if !request.price.is_positive() {
            return Err(ValidationError::NonPositivePrice);
        }

        if let Some(item) = self.record.items.iter_mut().find(|i| i.id == request.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            let meta = catalog::meta_for(&request.id)
                .unwrap_or_else(|| catalog::fallback_meta(&request.id));
            self.record.items.push(CartItem {
                id: request.id,
                name: request.name,
                unit_price: request.price,
                quantity: 1,
                image: request.image,
                author: request.author,
                meta: Some(meta),
            });
        }

        self.persist();
        Ok(())
    }

    /// Bump the quantity of a course already in the cart.
    ///
    /// Returns whether anything changed; an unknown id is a silent no-op.
    pub fn increment(&mut self, id: &CourseId) -> bool {
        let Some(item) = self.record.items.iter_mut().find(|i| &i.id == id) else {
            return false;
        };
        item.quantity = item.quantity.saturating_add(1);
        self.persist();
        true
    }

    /// Drop the quantity of a course by one. At quantity 1 this removes the
    /// item entirely; a quantity of 0 is never stored.
    pub fn decrement(&mut self, id: &CourseId) -> bool {
        self.remove(id, false)
    }

    /// Remove a course, either one unit or the whole line.
    ///
    /// Returns whether anything changed; an unknown id is a silent no-op.
    pub fn remove(&mut self, id: &CourseId, all: bool) -> bool {
        let Some(position) = self.record.items.iter().position(|i| &i.id == id) else {
            return false;
        };

        let quantity = self.record.items.get(position).map_or(0, |i| i.quantity);
        if all || quantity <= 1 {
            self.record.items.remove(position);
        } else if let Some(item) = self.record.items.get_mut(position) {
            item.quantity -= 1;
        }

        self.persist();
        true
    }

    /// Empty the cart, persisting an explicit empty record.
    pub fn clear(&mut self) {
        self.record.items.clear();
        self.persist();
    }

    /// Subtotal, 20% TVA, and total as exact decimals.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let subtotal: Decimal = self.record.items.iter().map(CartItem::line_total).sum();
        let tax = subtotal * Decimal::new(20, 2);
        CartTotals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    fn persist(&self) {
        self.storage.store_json(StorageKey::Cart, &self.record);
    }
}
