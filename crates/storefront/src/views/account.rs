//! Header account link and profile page projections.

use askama::Template;
use chrono::{Local, Locale};

use crate::error::RenderError;
use crate::models::Session;
use crate::views::surface::{Region, Surface};

/// Where the header account icon points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLinkView {
    pub href: &'static str,
    pub title: &'static str,
}

/// The header link for the current session state.
#[must_use]
pub const fn project_account_link(logged_in: bool) -> AccountLinkView {
    if logged_in {
        AccountLinkView {
            href: "profile.html",
            title: "Mon Profil",
        }
    } else {
        AccountLinkView {
            href: "login.html",
            title: "Se connecter",
        }
    }
}

/// The profile card for a logged-in member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub full_name: String,
    pub email: String,
    /// French long date with time, "21 août 2026 à 14:30".
    pub logged_in_at: String,
}

impl From<&Session> for ProfileView {
    fn from(session: &Session) -> Self {
        let local = session.logged_in_at.with_timezone(&Local);
        Self {
            full_name: session.display_name.clone(),
            email: session.email.to_string(),
            logged_in_at: local
                .format_localized("%-d %B %Y à %H:%M", Locale::fr_FR)
                .to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "partials/account_link.html")]
struct AccountLinkTemplate {
    link: AccountLinkView,
}

#[derive(Template)]
#[template(path = "profile/card.html")]
struct ProfileTemplate {
    profile: ProfileView,
}

/// Re-render the header link and, when mounted, the profile card.
///
/// # Errors
///
/// Returns [`RenderError`] if a template fails.
pub fn reconcile_account(
    surface: &mut Surface,
    session: Option<&Session>,
) -> Result<(), RenderError> {
    let link = AccountLinkTemplate {
        link: project_account_link(session.is_some()),
    }
    .render()?;
    surface.set(&Region::AccountLink, link, true);

    let (profile_html, visible) = match session {
        Some(session) => (
            ProfileTemplate {
                profile: ProfileView::from(session),
            }
            .render()?,
            true,
        ),
        None => (String::new(), false),
    };
    surface.set(&Region::Profile, profile_html, visible);

    Ok(())
}
