//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};

use signup::Trace;
use signup::inbound::http::configure;
use signup::inbound::http::state::HttpState;

/// Construct an Actix HTTP server serving the registration endpoint.
///
/// Each worker shares the same registry, so a user registered through one
/// worker is visible to all of them.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        host,
        port,
        registry,
    } = config;
    let http_state = web::Data::new(HttpState::new(registry));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_state.clone())
            .wrap(Trace)
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run();

    Ok(server)
}
