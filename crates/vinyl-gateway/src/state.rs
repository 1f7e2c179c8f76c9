use std::sync::Arc;

use vinyl_core::AlbumStore;

/// Shared handler state. Cloning only bumps the store's reference count.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn AlbumStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AlbumStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn AlbumStore {
        self.store.as_ref()
    }
}
