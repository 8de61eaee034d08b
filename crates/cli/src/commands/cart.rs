//! Shopping cart commands.
//!
//! # Usage
//!
//! ```bash
//! # Catalog courses resolve by id alone
//! chouette cart add python
//!
//! # Anything else needs a name and a strict decimal price
//! chouette cart add rust --name "Rust avancé" --price 59.99
//!
//! chouette cart increment python
//! chouette cart show
//! ```

#![allow(clippy::print_stdout)]

use chouette_core::{CourseId, Price};
use chouette_storefront::app::App;
use chouette_storefront::catalog;
use chouette_storefront::error::ValidationError;
use chouette_storefront::stores::AddToCart;
use chouette_storefront::views;

use super::CliError;

/// Add a course to the cart.
///
/// Catalog ids come with their name and price; other ids need both passed
/// explicitly. An explicit price always goes through strict parsing, so
/// `--price 49,99` is rejected rather than coerced.
///
/// # Errors
///
/// [`CliError::UnknownCourse`] for an off-catalog id without name and price,
/// or the store's rejection for an invalid price.
pub fn add(
    app: &App,
    id: &str,
    name: Option<String>,
    price: Option<String>,
) -> Result<(), CliError> {
    let course_id = CourseId::from(id);

    let request = if let Some(course) = catalog::find(&course_id) {
        let mut request = AddToCart::from(course);
        if let Some(name) = name {
            request.name = name;
        }
        if let Some(price) = price {
            request.price = parse_price(&price)?;
        }
        request
    } else {
        let (Some(name), Some(price)) = (name, price) else {
            return Err(CliError::UnknownCourse(id.to_owned()));
        };
        AddToCart {
            id: course_id,
            name,
            price: parse_price(&price)?,
            image: None,
            author: None,
        }
    };

    let name = request.name.clone();
    app.add_to_cart(request)?;
    println!("« {name} » ajouté au panier.");
    show(app);
    Ok(())
}

/// Print the cart lines and totals.
pub fn show(app: &App) {
    let items = app.cart_items();
    if items.is_empty() {
        println!("Le panier est vide.");
        return;
    }

    for item in &items {
        let meta = views::cart::display_meta(item);
        println!(
            "{:>2} × {} · {} ({} {}, {})",
            item.quantity,
            item.name,
            views::cart::format_price(item.line_total()),
            meta.icon,
            meta.category,
            meta.level.label(),
        );
    }

    let totals = app.cart_totals();
    println!("Sous-total : {}", views::cart::format_price(totals.subtotal));
    println!("TVA (20%)  : {}", views::cart::format_price(totals.tax));
    println!("Total      : {}", views::cart::format_price(totals.total));
}

/// Raise the quantity of a line by one.
pub fn increment(app: &App, id: &str) {
    report(app.increment_cart_item(&CourseId::from(id)), id);
}

/// Lower the quantity of a line by one, dropping the line at one.
pub fn decrement(app: &App, id: &str) {
    report(app.decrement_cart_item(&CourseId::from(id)), id);
}

/// Remove a line regardless of quantity.
pub fn remove(app: &App, id: &str) {
    report(app.remove_from_cart(&CourseId::from(id)), id);
}

/// Empty the cart.
pub fn clear(app: &App) {
    app.clear_cart();
    println!("Panier vidé.");
}

fn parse_price(input: &str) -> Result<Price, CliError> {
    Ok(Price::parse(input).map_err(ValidationError::from)?)
}

// Mutating an absent line is a no-op, not a failure.
fn report(changed: bool, id: &str) {
    if changed {
        println!("Panier mis à jour.");
    } else {
        println!("Aucun article « {id} » dans le panier.");
    }
}
