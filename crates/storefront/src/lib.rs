//! Chouette Learning storefront state engine.
//!
//! This crate provides the client-side state layer as a library: persisted
//! collections (cart, chat, session), their derived views, and the render
//! reconciliation against a headless surface.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod bot;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod migrate;
pub mod models;
pub mod pages;
pub mod storage;
pub mod stores;
pub mod views;
