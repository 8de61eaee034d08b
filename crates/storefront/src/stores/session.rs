//! The login session store.

use chouette_core::Email;
use chrono::Utc;

use crate::error::{MIN_PASSWORD_LEN, ValidationError};
use crate::models::{ChatAuthor, Session};
use crate::storage::{Storage, StorageKey};

/// Value accepted as both email and password for the demo account.
const DEMO_LOGIN: &str = "123";
/// Identity served for the demo account.
const DEMO_EMAIL: &str = "etudiant@chouette.fr";
const DEMO_DISPLAY_NAME: &str = "Étudiant Chouette";

/// The login session: owner of `chouette_learning_session`.
///
/// There is no server to check credentials against, so login validates shape
/// only: a well-formed email plus a password of at least [`MIN_PASSWORD_LEN`]
/// characters opens a session for anyone. The `123` / `123` pair short-cuts
/// to a canned demo identity.
pub struct SessionStore {
    storage: Storage,
    session: Option<Session>,
}

impl SessionStore {
    /// Load the session from storage. Missing or unreadable records mean
    /// logged out.
    #[must_use]
    pub fn load(storage: Storage) -> Self {
        let session = storage.load_json::<Session>(StorageKey::Session);
        Self { storage, session }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Chat identity for whoever is browsing: the member's display name when
    /// logged in, an anonymous guest otherwise.
    #[must_use]
    pub fn chat_author(&self) -> ChatAuthor {
        self.session
            .as_ref()
            .map_or_else(ChatAuthor::guest, |s| ChatAuthor::member(&s.display_name))
    }

    /// Open a session for the given credentials and persist it.
    ///
    /// The email is trimmed first. The demo pair is recognized before any
    /// shape check, since `123` is not a well-formed address.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingCredentials`] when either field is blank,
    /// [`ValidationError::Email`] for a malformed address and
    /// [`ValidationError::PasswordTooShort`] below the minimum length. The
    /// current session is untouched on error.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, ValidationError> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err(ValidationError::MissingCredentials);
        }

        let session = if email == DEMO_LOGIN && password == DEMO_LOGIN {
            Session {
                email: Email::parse(DEMO_EMAIL)?,
                display_name: DEMO_DISPLAY_NAME.to_owned(),
                logged_in_at: Utc::now(),
            }
        } else {
            let email = Email::parse(email)?;
            if password.len() < MIN_PASSWORD_LEN {
                return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
            }
            let display_name = display_name_for(&email);
            Session {
                email,
                display_name,
                logged_in_at: Utc::now(),
            }
        };

        self.storage.store_json(StorageKey::Session, &session);
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Close the session and drop its stored record.
    pub fn logout(&mut self) {
        self.session = None;
        self.storage.remove(StorageKey::Session);
    }
}

/// Display name derived from the address: the local part with its first
/// letter uppercased, so `marie.curie@exemple.fr` signs as `Marie.curie`.
fn display_name_for(email: &Email) -> String {
    let local = email.local_part();
    let mut chars = local.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
