//! Account registration service.
//!
//! The [`domain`] module holds the rule engine and the in-memory user store;
//! [`inbound::http`] exposes it as `POST /register`.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod settings;

pub use middleware::Trace;
