//! Shared application state for all routes.

use crate::store::ItemStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected store handle; created once at startup, shared by all handlers.
    pub store: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        AppState { store }
    }
}
