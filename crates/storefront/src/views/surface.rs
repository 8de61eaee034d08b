//! The render surface: mounted regions and their current content.

use std::collections::HashMap;

use chouette_core::{CourseId, MessageId};

/// A render target a page may mount.
///
/// Pages mount the subset they actually display; reconcilers write to every
/// region they know about and the surface drops writes to the rest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    /// The cart count in the header.
    CartBadge,
    /// The cart page item list.
    CartItemList,
    /// The cart page totals block.
    CartSummary,
    /// The cart page empty-state block.
    CartEmptyState,
    /// The quantity readout on one course card.
    CourseQuantity(CourseId),
    /// The chat transcript.
    ChatTranscript,
    /// The transient confirmation toast.
    Notice,
    /// The account link in the header.
    AccountLink,
    /// The profile page body.
    Profile,
}

/// Rendered content for one mounted region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slot {
    /// Rendered markup, or bare text for counter regions.
    pub html: String,
    /// Whether the region should currently be shown.
    pub visible: bool,
}

/// The mounted regions of the live page and their rendered slots.
///
/// Comparing two surfaces compares every slot byte for byte, which is what
/// the idempotence checks lean on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Surface {
    slots: HashMap<Region, Slot>,
    chat_anchor: Option<MessageId>,
}

impl Surface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a region with an empty, hidden slot.
    pub fn mount(&mut self, region: Region) {
        self.slots.entry(region).or_default();
    }

    /// Mount several regions at once.
    pub fn mount_all(&mut self, regions: impl IntoIterator<Item = Region>) {
        for region in regions {
            self.mount(region);
        }
    }

    #[must_use]
    pub fn is_mounted(&self, region: &Region) -> bool {
        self.slots.contains_key(region)
    }

    /// The slot for a region, if mounted.
    #[must_use]
    pub fn slot(&self, region: &Region) -> Option<&Slot> {
        self.slots.get(region)
    }

    /// Regions currently mounted, in no particular order.
    pub fn mounted(&self) -> impl Iterator<Item = &Region> {
        self.slots.keys()
    }

    /// Write content into a region. Silently does nothing when the region is
    /// not mounted.
    pub fn set(&mut self, region: &Region, html: String, visible: bool) {
        if let Some(slot) = self.slots.get_mut(region) {
            slot.html = html;
            slot.visible = visible;
        }
    }

    /// The auto-scroll anchor: id of the newest rendered chat message.
    #[must_use]
    pub const fn chat_anchor(&self) -> Option<MessageId> {
        self.chat_anchor
    }

    pub fn scroll_chat_to(&mut self, anchor: Option<MessageId>) {
        self.chat_anchor = anchor;
    }
}
