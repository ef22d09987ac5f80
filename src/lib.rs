//! Shift scheduling service.
//!
//! This crate exposes a `shifts` REST resource with create, read, update and
//! delete operations. Creates and updates are guarded by a duplicate-window
//! check so that two shifts cannot hold the same window on the same date.

#![warn(missing_docs)]

pub mod api;
pub mod checker;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod usecase;
