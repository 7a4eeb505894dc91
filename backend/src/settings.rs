//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SIGNUP_*` environment variables, or a config
//! file, with the defaults below when none is set.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 8080;

/// Configuration values for the registration server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIGNUP")]
pub struct ServerSettings {
    /// Host name or address to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Start without the pre-existing sample user.
    #[ortho_config(default = false)]
    pub start_empty: bool,
}

impl ServerSettings {
    /// Return the configured host, falling back to the default.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to the default.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Base URL clients use to reach the server.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host(), self.port())
    }
}
