//! Driving port for account registration.
//!
//! Inbound adapters call this port to admit new users without knowing how
//! the user set is held. Handler tests substitute a test double instead of
//! wiring a real store.

use async_trait::async_trait;

use crate::domain::{RegistrationError, User};

/// Domain use-case port for validating and admitting candidate users.
#[async_trait]
pub trait UserRegistry: Send + Sync {
    /// Check a candidate against the shape rules and the stored users.
    ///
    /// Read-only: the stored users are never modified.
    async fn authenticate(&self, candidate: &User) -> Result<(), RegistrationError>;

    /// Admit a candidate, making it visible to every later call.
    ///
    /// Runs [`UserRegistry::authenticate`] and the append as one atomic step.
    /// On failure the stored users are unchanged and the check's error is
    /// returned as-is.
    async fn register(&self, candidate: User) -> Result<(), RegistrationError>;
}
