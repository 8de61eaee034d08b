//! Cart projections and their reconciler.

use askama::Template;
use chouette_core::{CourseId, CourseMeta};
use rust_decimal::Decimal;

use crate::catalog;
use crate::error::RenderError;
use crate::models::CartItem;
use crate::stores::CartTotals;
use crate::views::surface::{Region, Surface};

/// Author shown for lines that came without one.
const HOUSE_AUTHOR: &str = "Chouette Learning";

// ============================================================================
// Projections
// ============================================================================

/// Total quantity across all lines; the header badge number.
#[must_use]
pub fn badge_count(items: &[CartItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

/// Quantity of one course, zero when absent.
#[must_use]
pub fn quantity_for(items: &[CartItem], id: &CourseId) -> u32 {
    items
        .iter()
        .find(|item| item.id == *id)
        .map_or(0, |item| item.quantity)
}

/// Metadata for one line, resolved in three tiers: the line's own snapshot,
/// then the catalog, then the generic fallback.
#[must_use]
pub fn display_meta(item: &CartItem) -> CourseMeta {
    item.meta
        .clone()
        .or_else(|| catalog::meta_for(&item.id))
        .unwrap_or_else(|| catalog::fallback_meta(&item.id))
}

/// The two placeholder letters shown when a line has no image.
#[must_use]
pub fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

/// Prices render with exactly two decimals and a trailing euro sign.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    let mut amount = amount.round_dp(2);
    amount.rescale(2);
    format!("{amount} €")
}

// ============================================================================
// Views
// ============================================================================

/// One cart line ready for the template.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub author: String,
    pub icon: String,
    pub category: String,
    pub level_label: String,
    pub rating: String,
    pub quantity: u32,
    pub line_total: String,
    pub unit_price: String,
    pub image: Option<String>,
    pub placeholder_color: String,
    pub placeholder_initials: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        let meta = display_meta(item);
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            author: item
                .author
                .clone()
                .unwrap_or_else(|| HOUSE_AUTHOR.to_owned()),
            icon: meta.icon,
            category: meta.category,
            level_label: meta.level.label().to_owned(),
            rating: meta.rating,
            quantity: item.quantity,
            line_total: format_price(item.line_total()),
            unit_price: format_price(item.unit_price.amount()),
            image: item.image.clone(),
            placeholder_color: catalog::placeholder_color(&item.id).to_owned(),
            placeholder_initials: initials(&item.name),
        }
    }
}

#[derive(Template)]
#[template(path = "cart/items.html")]
struct CartItemsTemplate {
    items: Vec<CartItemView>,
}

#[derive(Template)]
#[template(path = "cart/summary.html")]
struct CartSummaryTemplate {
    subtotal: String,
    tax: String,
    total: String,
}

#[derive(Template)]
#[template(path = "cart/empty.html")]
struct CartEmptyTemplate;

// ============================================================================
// Reconciliation
// ============================================================================

/// Re-render every mounted cart region from the given snapshot.
///
/// Empty cart: list cleared, empty state shown, summary and badge hidden.
/// Non-empty: the inverse. Calling this twice with equal snapshots leaves the
/// surface byte-identical.
///
/// # Errors
///
/// Returns [`RenderError`] if a template fails, which leaves already-written
/// regions in place.
pub fn reconcile_cart(
    surface: &mut Surface,
    items: &[CartItem],
    totals: &CartTotals,
) -> Result<(), RenderError> {
    let count = badge_count(items);
    surface.set(&Region::CartBadge, count.to_string(), count > 0);

    let list_html = if items.is_empty() {
        String::new()
    } else {
        CartItemsTemplate {
            items: items.iter().map(CartItemView::from).collect(),
        }
        .render()?
    };
    surface.set(&Region::CartItemList, list_html, !items.is_empty());

    let summary_html = CartSummaryTemplate {
        subtotal: format_price(totals.subtotal),
        tax: format_price(totals.tax),
        total: format_price(totals.total),
    }
    .render()?;
    surface.set(&Region::CartSummary, summary_html, !items.is_empty());

    surface.set(
        &Region::CartEmptyState,
        CartEmptyTemplate.render()?,
        items.is_empty(),
    );

    let mounted_quantities: Vec<CourseId> = surface
        .mounted()
        .filter_map(|region| match region {
            Region::CourseQuantity(id) => Some(id.clone()),
            _ => None,
        })
        .collect();
    for id in mounted_quantities {
        let quantity = quantity_for(items, &id);
        surface.set(&Region::CourseQuantity(id), quantity.to_string(), true);
    }

    Ok(())
}
