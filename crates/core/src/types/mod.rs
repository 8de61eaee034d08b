//! Core types for Chouette Learning.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod email;
pub mod id;
pub mod price;

pub use catalog::{CourseLevel, CourseMeta};
pub use email::{Email, EmailError};
pub use id::{CourseId, MessageId};
pub use price::{Price, PriceError};
