//! Login session record.

use chouette_core::Email;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged-in member.
///
/// Presence of this record under the session key is what "logged in" means;
/// there is no separate flag. Guests simply have no record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: Email,
    pub display_name: String,
    pub logged_in_at: DateTime<Utc>,
}
