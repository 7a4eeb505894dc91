//! Backend entry-point: loads settings, wires the registration endpoint, and
//! runs the listener until shutdown.

mod server;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use signup::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let server = create_server(ServerConfig::from_settings(&settings))?;

    let url = settings.base_url();
    info!(start_empty = settings.start_empty, "Server is running on {url}");
    server.await
}
