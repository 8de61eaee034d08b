//! Chouette Core - Shared types library.
//!
//! This crate provides common types used across all Chouette Learning
//! components:
//! - `storefront` - Client-side state engine for the learning storefront
//! - `cli` - Command-line driver for the stores and renderers
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no persistence, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   course metadata

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
