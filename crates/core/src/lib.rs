//! Pantry Core - Shared types library.
//!
//! This crate provides the data model shared between the Pantry server and
//! its tests:
//! - `server` - HTTP API binary
//! - `integration-tests` - end-to-end tests driving the assembled router
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! async. Everything here is synchronously testable.
//!
//! # Modules
//!
//! - [`types`] - Item/Image/Offer records, the layered user shapes, the
//!   tri-state [`types::Field`] wrapper and the partial-update merge

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
