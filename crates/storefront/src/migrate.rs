//! Cart schema migration.
//!
//! Carts written by the first release were a bare JSON array of items with no
//! catalog metadata. Version 2 wrapped the array in a versioned envelope and
//! attached [`chouette_core::CourseMeta`] to each item. Old records keep
//! loading forever: the store parses whatever shape is on disk, runs it
//! through [`migrate_cart`], and re-persists once if anything changed.

use serde::Deserialize;

use crate::catalog;
use crate::models::{CART_SCHEMA_VERSION, CartItem, CartRecord};

/// Any cart blob a release of this storefront has ever written.
///
/// Untagged: an object matches the envelope, an array matches the legacy
/// shape. Anything else fails to parse and the caller treats the cart as
/// empty.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StoredCart {
    Versioned(CartRecord),
    Legacy(Vec<CartItem>),
}

/// Outcome of a migration run.
#[derive(Debug, PartialEq)]
pub struct Migrated {
    pub record: CartRecord,
    /// Whether the record differs from what was stored. The caller persists
    /// exactly when this is set, so migration costs one write at most.
    pub changed: bool,
}

/// Bring a stored cart up to the current schema.
///
/// Pure, and idempotent: feeding the migrated record back in reports no
/// change. Items whose id the catalog does not know keep `meta` absent; the
/// display layer resolves generic defaults for them at render time.
#[must_use]
pub fn migrate_cart(stored: StoredCart) -> Migrated {
    let (mut record, mut changed) = match stored {
        StoredCart::Versioned(record) => {
            let outdated = record.version != CART_SCHEMA_VERSION;
            (record, outdated)
        }
        StoredCart::Legacy(items) => (
            CartRecord {
                version: CART_SCHEMA_VERSION,
                items,
            },
            true,
        ),
    };
    record.version = CART_SCHEMA_VERSION;

    for item in &mut record.items {
        if item.meta.is_none() {
            if let Some(meta) = catalog::meta_for(&item.id) {
                item.meta = Some(meta);
                changed = true;
            }
        }
    }

    Migrated { record, changed }
}
