//! HTTP server configuration object and helpers.

use std::sync::Arc;

use signup::domain::InMemoryUserRegistry;
use signup::domain::ports::UserRegistry;
use signup::settings::ServerSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) registry: Arc<dyn UserRegistry>,
}

impl ServerConfig {
    /// Construct a configuration backed by a seeded in-memory registry.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            registry: Arc::new(InMemoryUserRegistry::new()),
        }
    }

    /// Derive the configuration from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &ServerSettings) -> Self {
        let config = Self::new(settings.host(), settings.port());
        if settings.start_empty {
            config.with_registry(Arc::new(InMemoryUserRegistry::empty()))
        } else {
            config
        }
    }

    /// Replace the registry the handlers talk to.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<dyn UserRegistry>) -> Self {
        self.registry = registry;
        self
    }
}
