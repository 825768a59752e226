//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::notify::NotificationLog;
use crate::store::ItemStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the item store, and the notification log handle.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: ItemStore,
    notifications: NotificationLog,
}

impl AppState {
    /// Create a new application state with the store seeded from the fixed
    /// sample catalog.
    #[must_use]
    pub fn new(config: ServerConfig, notifications: NotificationLog) -> Self {
        Self::with_store(config, ItemStore::with_sample_items(), notifications)
    }

    /// Create a new application state around an explicit store.
    #[must_use]
    pub fn with_store(
        config: ServerConfig,
        store: ItemStore,
        notifications: NotificationLog,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                notifications,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the item store.
    #[must_use]
    pub fn store(&self) -> &ItemStore {
        &self.inner.store
    }

    /// Get a reference to the notification log handle.
    #[must_use]
    pub fn notifications(&self) -> &NotificationLog {
        &self.inner.notifications
    }
}
