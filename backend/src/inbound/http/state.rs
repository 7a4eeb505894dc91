//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the [`UserRegistry`] port and stay testable without a real store.

use std::sync::Arc;

use crate::domain::ports::UserRegistry;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registry: Arc<dyn UserRegistry>,
}

impl HttpState {
    /// Construct state around a registry implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use signup::domain::InMemoryUserRegistry;
    /// use signup::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(InMemoryUserRegistry::new()));
    /// let _registry = state.registry.clone();
    /// ```
    #[must_use]
    pub fn new(registry: Arc<dyn UserRegistry>) -> Self {
        Self { registry }
    }
}
