//! In-memory user set backing the [`UserRegistry`] port.
//!
//! The store is an append-only sequence held behind an `RwLock`. Read-only
//! checks share the lock; registration holds the write lock across the check
//! and the append so two concurrent candidates can never both pass the
//! uniqueness scan against the same snapshot.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::ports::UserRegistry;
use super::validation::validate_shape;
use super::{RegistrationError, User};

/// Decide whether `candidate` may join `stored`.
///
/// Shape rules run first, then a single linear scan over `stored` in order.
/// Within each stored record the email is compared before the nickname, so a
/// record matching both reports [`RegistrationError::EmailExists`].
///
/// # Examples
/// ```
/// use signup::domain::{RegistrationError, User, registry::check_candidate};
///
/// let stored = [User::sample()];
/// let candidate = User::new("user", "new@example.com", "F9DXIK6hvuFINjmC");
/// assert_eq!(
///     check_candidate(&candidate, &stored),
///     Err(RegistrationError::NicknameExists)
/// );
/// ```
pub fn check_candidate(candidate: &User, stored: &[User]) -> Result<(), RegistrationError> {
    validate_shape(candidate)?;

    for existing in stored {
        if existing.email() == candidate.email() {
            return Err(RegistrationError::EmailExists);
        }
        if existing.nickname() == candidate.nickname() {
            return Err(RegistrationError::NicknameExists);
        }
    }

    Ok(())
}

/// Process-lifetime user store.
///
/// ## Invariants
/// - No two stored users share a nickname.
/// - No two stored users share an email.
/// - Users are kept in insertion order and never removed.
#[derive(Debug)]
pub struct InMemoryUserRegistry {
    users: RwLock<Vec<User>>,
}

impl Default for InMemoryUserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRegistry {
    /// Create a registry seeded with [`User::sample`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(vec![User::sample()]),
        }
    }

    /// Create a registry with no stored users.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the registry holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of the stored users in insertion order.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.read().clone()
    }

    // A panicking writer can only have failed before `push`, so the sequence
    // behind a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRegistry for InMemoryUserRegistry {
    async fn authenticate(&self, candidate: &User) -> Result<(), RegistrationError> {
        check_candidate(candidate, &self.read())
    }

    async fn register(&self, candidate: User) -> Result<(), RegistrationError> {
        let mut users = self.write();
        check_candidate(&candidate, &users)?;
        users.push(candidate);
        Ok(())
    }
}
