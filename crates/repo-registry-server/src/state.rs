//! Shared application state.

use repo_registry::Registry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Thread-safe handle to the registry.
pub type SharedRegistry = Arc<Mutex<Registry>>;

/// Application state shared across all handlers and middleware.
#[derive(Clone, Default)]
pub struct AppState {
    registry: SharedRegistry,
}

impl AppState {
    /// State backed by an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// State backed by an existing registry, e.g. one pre-populated in tests.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    /// Lock the registry for one operation.
    ///
    /// The guard must be dropped before the next `.await`. A poisoned lock is
    /// recovered: every registry method leaves the collection consistent.
    pub fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
