//! HTTP inbound adapter exposing the registration endpoint.

pub mod error;
pub mod register;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use register::configure;
