//! Domain primitives and the registration rule engine.
//!
//! Purpose: hold the transport-agnostic core. Nothing here knows about HTTP;
//! inbound adapters translate requests into [`User`] candidates and map
//! [`RegistrationError`] back onto their own envelopes.
//!
//! Public surface:
//! - User (alias to `user::User`): candidate or stored account record.
//! - RegistrationError (alias to `error::RegistrationError`): closed set of
//!   rejection reasons with exact wire messages.
//! - InMemoryUserRegistry (alias to `registry::InMemoryUserRegistry`): the
//!   lock-guarded user store implementing [`ports::UserRegistry`].
//! - TraceId (alias to `trace_id::TraceId`): request correlation identifier.

pub mod error;
pub mod ports;
pub mod registry;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::error::RegistrationError;
pub use self::registry::InMemoryUserRegistry;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::User;
