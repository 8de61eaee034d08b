//! Error types for store operations and rendering.
//!
//! Three failure families exist and they never mix: validation errors reject
//! an operation locally before any state changes, storage trouble degrades
//! silently inside [`crate::storage`], and mutating an id that is not there
//! is a no-op by contract rather than an error at all.

use chouette_core::{EmailError, PriceError};
use thiserror::Error;

/// Minimum accepted password length for login.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Rejected input. The operation did not run and nothing was persisted.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Chat message was empty after trimming.
    #[error("message is empty after trimming")]
    EmptyMessage,

    /// Price input did not parse or was negative.
    #[error("invalid price: {0}")]
    Price(#[from] PriceError),

    /// Price parsed but is not strictly positive.
    #[error("price must be greater than zero")]
    NonPositivePrice,

    /// Login attempted with a blank email or password.
    #[error("email and password are both required")]
    MissingCredentials,

    /// Login email failed structural validation.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    /// Login password below the minimum length.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum allowed length.
        min: usize,
    },
}

impl ValidationError {
    /// French text suitable for showing directly to the visitor.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyMessage => "Le message ne peut pas être vide.".to_owned(),
            Self::Price(_) | Self::NonPositivePrice => "Prix invalide.".to_owned(),
            Self::MissingCredentials => "Veuillez remplir tous les champs.".to_owned(),
            Self::Email(_) => "Veuillez entrer une adresse email valide.".to_owned(),
            Self::PasswordTooShort { min } => {
                format!("Le mot de passe doit contenir au moins {min} caractères.")
            }
        }
    }
}

/// A template failed to render.
#[derive(Debug, Error)]
#[error("template rendering failed: {0}")]
pub struct RenderError(#[from] askama::Error);
