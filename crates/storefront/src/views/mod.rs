//! Projection and reconciliation of store state into rendered markup.
//!
//! Projections are pure: snapshot in, view struct out. Reconcilers render
//! the views through Askama and write the result into whatever regions the
//! current [`Surface`] has mounted. Rendering the same snapshot twice yields
//! byte-identical slots.

pub mod account;
pub mod cart;
pub mod chat;
pub mod notice;
pub mod surface;

pub use surface::{Region, Slot, Surface};
