//! Login session commands.
//!
//! # Usage
//!
//! ```bash
//! chouette session login -e marie@exemple.fr -p secret
//! chouette session show
//! chouette session logout
//!
//! # The demo account
//! chouette session login -e 123 -p 123
//! ```

#![allow(clippy::print_stdout)]

use chouette_storefront::app::App;
use chouette_storefront::views::account::ProfileView;

use super::CliError;

/// Log in and persist the session.
///
/// # Errors
///
/// Returns the store's rejection for missing or malformed credentials.
pub fn login(app: &App, email: &str, password: &str) -> Result<(), CliError> {
    let session = app.login(email, password)?;
    println!("Connecté en tant que {} <{}>.", session.display_name, session.email);
    Ok(())
}

/// Log out and drop the stored session.
pub fn logout(app: &App) {
    app.logout();
    println!("Déconnecté.");
}

/// Print the current session, if any.
pub fn show(app: &App) {
    match app.current_session() {
        Some(session) => {
            let view = ProfileView::from(&session);
            println!("{} <{}>", view.full_name, view.email);
            println!("Connecté depuis le {}", view.logged_in_at);
        }
        None => println!("Non connecté."),
    }
}
