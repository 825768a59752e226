//! Core types for Pantry.
//!
//! This module provides the catalog records and the field-presence wrapper
//! that partial updates are built on.

pub mod email;
pub mod field;
pub mod item;
pub mod model_name;
pub mod user;

pub use email::{Email, EmailError};
pub use field::Field;
pub use item::{Image, Item, ItemPatch, Offer, DEFAULT_TAX};
pub use model_name::ModelName;
pub use user::{UserIn, UserInDb, UserOut};
