//! Render a page surface to stdout.

#![allow(clippy::print_stdout)]

use chouette_storefront::app::App;
use chouette_storefront::pages::{Page, PageKind};
use chouette_storefront::views::Region;

use super::CliError;

/// Open a page and print every visible region's markup.
///
/// Opening the chat page on an empty transcript waits for the welcome timer
/// so the output matches what a visitor would see shortly after load.
///
/// # Errors
///
/// [`CliError::UnknownPage`] for an unrecognized name, or a render failure.
pub async fn page(app: &App, name: &str) -> Result<(), CliError> {
    let kind = parse_kind(name)?;
    let mut page = Page::open(app.clone(), kind)?;

    if let Some(welcome) = page.take_welcome() {
        if let Err(e) = welcome.await {
            tracing::warn!("welcome timer failed: {e}");
        }
        page.pump()?;
    }

    let mut regions: Vec<&Region> = page.surface().mounted().collect();
    regions.sort_by_key(|region| label(region));
    for region in regions {
        let Some(slot) = page.surface().slot(region) else {
            continue;
        };
        if slot.visible && !slot.html.is_empty() {
            println!("<!-- {} -->", label(region));
            println!("{}", slot.html);
        }
    }
    Ok(())
}

fn parse_kind(name: &str) -> Result<PageKind, CliError> {
    match name.to_ascii_lowercase().as_str() {
        "home" | "accueil" => Ok(PageKind::Home),
        "courses" | "cours" => Ok(PageKind::Courses),
        "cart" | "panier" => Ok(PageKind::Cart),
        "chat" => Ok(PageKind::Chat),
        "profile" | "profil" => Ok(PageKind::Profile),
        "login" | "connexion" => Ok(PageKind::Login),
        other => Err(CliError::UnknownPage(other.to_owned())),
    }
}

fn label(region: &Region) -> String {
    match region {
        Region::CartBadge => "cart-badge".to_owned(),
        Region::CartItemList => "cart-items".to_owned(),
        Region::CartSummary => "cart-summary".to_owned(),
        Region::CartEmptyState => "cart-empty".to_owned(),
        Region::CourseQuantity(id) => format!("quantity:{id}"),
        Region::ChatTranscript => "chat".to_owned(),
        Region::Notice => "notice".to_owned(),
        Region::AccountLink => "account-link".to_owned(),
        Region::Profile => "profile".to_owned(),
    }
}
