//! In-memory item store.
//!
//! Process-wide shared mutable state, owned by [`ItemStore`] and reached only
//! through its methods. Concurrent writers are serialized by the lock; the
//! source of this behavior left concurrent access undefined, so serializing
//! is the deliberate safe choice here.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use pantry_core::{Item, ItemPatch};
use thiserror::Error;

/// Store operation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The identifier is not in the store.
    #[error("no item with id \"{0}\"")]
    UnknownId(String),
}

/// String-keyed map of full item records.
///
/// Entries are seeded at startup, replaced wholesale by a full update, or
/// selectively merged by a partial update. There is no delete operation.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<HashMap<String, Item>>,
}

impl ItemStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the fixed sample catalog.
    #[must_use]
    pub fn with_sample_items() -> Self {
        let store = Self::new();
        store.replace("foo", sample_item("Foo", None, 50.2, None));
        store.replace(
            "bar",
            sample_item("Bar", Some("The Bar fighters"), 62.0, Some(20.2)),
        );
        store.replace(
            "baz",
            sample_item("Baz", Some("There goes my baz"), 50.2, Some(10.5)),
        );
        store
    }

    /// Look up the item stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownId`] if no entry exists.
    pub fn get(&self, id: &str) -> Result<Item, StoreError> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))
    }

    /// Unconditionally replace (or create) the entry under `id`.
    pub fn replace(&self, id: &str, item: Item) {
        self.write().insert(id.to_string(), item);
    }

    /// Overlay `patch` onto the entry under `id`, returning the merged record.
    ///
    /// Fields the caller supplied replace the stored values; fields the
    /// caller omitted are retained unchanged. The merged record is written
    /// back before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownId`] if no entry exists.
    pub fn merge(&self, id: &str, patch: &ItemPatch) -> Result<Item, StoreError> {
        let mut items = self.write();
        let current = items
            .get(id)
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))?;

        let merged = patch.apply_to(current);
        items.insert(id.to_string(), merged.clone());
        Ok(merged)
    }

    /// Number of stored items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Item>> {
        // A poisoned lock means a panic mid-access; the map itself is still
        // coherent, so keep serving it.
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Item>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn sample_item(name: &str, description: Option<&str>, price: f64, tax: Option<f64>) -> Item {
    Item {
        name: name.to_string(),
        description: description.map(str::to_string),
        price,
        tax: tax.unwrap_or(pantry_core::DEFAULT_TAX),
        tags: Vec::new(),
        image: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pantry_core::Field;

    use super::*;

    #[test]
    fn test_sample_seed() {
        let store = ItemStore::with_sample_items();
        assert_eq!(store.len(), 3);

        let foo = store.get("foo").unwrap();
        assert_eq!(foo.name, "Foo");
        assert!((foo.price - 50.2).abs() < f64::EPSILON);
        assert!(foo.description.is_none());

        let bar = store.get("bar").unwrap();
        assert_eq!(bar.description.as_deref(), Some("The Bar fighters"));
        assert!((bar.tax - 20.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_get_unknown_id() {
        let store = ItemStore::with_sample_items();
        assert_eq!(
            store.get("qux"),
            Err(StoreError::UnknownId("qux".to_string()))
        );
    }

    #[test]
    fn test_replace_then_get_returns_exact_record() {
        let store = ItemStore::with_sample_items();
        let replacement = sample_item("New Foo", Some("replaced"), 12.0, Some(1.0));

        store.replace("foo", replacement.clone());
        assert_eq!(store.get("foo").unwrap(), replacement);
    }

    #[test]
    fn test_replace_is_idempotent() {
        let store = ItemStore::with_sample_items();
        let replacement = sample_item("New Foo", None, 12.0, None);

        store.replace("foo", replacement.clone());
        let after_once = store.get("foo").unwrap();
        store.replace("foo", replacement);
        assert_eq!(store.get("foo").unwrap(), after_once);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_replace_creates_missing_entry() {
        let store = ItemStore::new();
        store.replace("qux", sample_item("Qux", None, 1.0, None));
        assert_eq!(store.get("qux").unwrap().name, "Qux");
    }

    #[test]
    fn test_merge_updates_supplied_fields_and_persists() {
        let store = ItemStore::with_sample_items();
        let patch = ItemPatch {
            price: Field::Set(60.0),
            ..ItemPatch::default()
        };

        let merged = store.merge("foo", &patch).unwrap();
        assert_eq!(merged.name, "Foo");
        assert!((merged.price - 60.0).abs() < f64::EPSILON);

        // the merged record is what a subsequent lookup sees
        assert_eq!(store.get("foo").unwrap(), merged);
    }

    #[test]
    fn test_merge_unknown_id() {
        let store = ItemStore::with_sample_items();
        let patch = ItemPatch::default();
        assert_eq!(
            store.merge("qux", &patch),
            Err(StoreError::UnknownId("qux".to_string()))
        );
    }
}
