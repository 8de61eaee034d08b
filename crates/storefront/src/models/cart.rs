//! Cart record as persisted.

use chouette_core::{CourseId, CourseMeta, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Schema version written by this build.
///
/// Version 1 records were a bare item array without `meta`; version 2 wraps
/// the items in this envelope and carries catalog metadata per item.
pub const CART_SCHEMA_VERSION: u32 = 2;

/// One course in the cart.
///
/// `quantity` is at least 1 by store invariant: an item that would reach 0
/// is removed from the record instead. The unit price keeps its legacy wire
/// name `price`, which lets the same struct read version 1 items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CourseId,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Price,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<CourseMeta>,
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.amount() * Decimal::from(self.quantity)
    }
}

/// The versioned cart envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartRecord {
    pub version: u32,
    pub items: Vec<CartItem>,
}

impl CartRecord {
    /// An empty cart at the current schema version.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            version: CART_SCHEMA_VERSION,
            items: Vec::new(),
        }
    }
}

impl Default for CartRecord {
    fn default() -> Self {
        Self::empty()
    }
}
