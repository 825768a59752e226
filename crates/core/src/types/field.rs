//! Field-presence wrapper for partial updates.
//!
//! A partial update must distinguish "the caller did not mention this field"
//! from "the caller set this field to its default value". `Option` cannot
//! express that once the field itself is optional, so patch records wrap
//! every field in [`Field`]: `Unset` means the key was absent from the
//! payload, `Set` means it was present - even if the value it carried equals
//! the stored one or the type's default.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tri-state presence wrapper: absent, or present with a value.
///
/// With `#[serde(default)]` on the containing struct, a missing key
/// deserializes to `Unset` and a present key (including an explicit `null`
/// when `T` is an `Option`) deserializes to `Set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// The key was absent from the payload.
    #[default]
    Unset,
    /// The key was present with this value.
    Set(T),
}

impl<T> Field<T> {
    /// Returns `true` if the field was absent.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` if the field was supplied.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Borrow the supplied value, if any.
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Unset => None,
            Self::Set(value) => Some(value),
        }
    }

    /// Convert into a plain `Option`, losing the presence distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Unset => None,
            Self::Set(value) => Some(value),
        }
    }

    /// Return the supplied value, or `fallback` when the field was absent.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Unset => fallback,
            Self::Set(value) => value,
        }
    }
}

impl<T: Clone> Field<T> {
    /// Clone of the supplied value, or a clone of `current` when absent.
    pub fn cloned_or(&self, current: &T) -> T {
        match self {
            Self::Unset => current.clone(),
            Self::Set(value) => value.clone(),
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only ever called when the key is present; absence is handled by
        // the containing struct's #[serde(default)].
        T::deserialize(deserializer).map(Self::Set)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Unset fields are normally skipped via skip_serializing_if;
            // fall back to null if one slips through.
            Self::Unset => serializer.serialize_none(),
            Self::Set(value) => value.serialize(serializer),
        }
    }
}
