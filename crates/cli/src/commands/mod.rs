//! Command implementations.

pub mod cart;
pub mod chat;
pub mod render;
pub mod session;

use chouette_storefront::app::App;
use chouette_storefront::config::{ConfigError, StorefrontConfig};
use chouette_storefront::error::{RenderError, ValidationError};
use chouette_storefront::storage::StorageError;
use thiserror::Error;

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input rejected by a store; shown as the storefront's French message.
    #[error("{}", .0.user_message())]
    Rejected(#[from] ValidationError),

    /// Course id outside the catalog without explicit name and price.
    #[error("unknown course id: {0} (pass --name and --price to add it anyway)")]
    UnknownCourse(String),

    /// Render target that is not a page.
    #[error("unknown page: {0} (expected home, courses, cart, chat, profile or login)")]
    UnknownPage(String),

    /// Destructive command without its confirmation flag.
    #[error("refusing to clear the chat without --yes")]
    Unconfirmed,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Build the application over the configured state directory.
///
/// # Errors
///
/// Returns an error when the environment configuration is invalid or the
/// state directory cannot be created.
pub fn open_app() -> Result<App, CliError> {
    let config = StorefrontConfig::from_env()?;
    Ok(App::new(config)?)
}
