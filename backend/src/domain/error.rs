//! Registration failures.
//!
//! The set is closed: every way a candidate can be turned away is one of the
//! variants below. `Display` renders the exact message clients see on the
//! wire, so the strings must not change without a compatibility note.

use thiserror::Error;

/// Reason a candidate user was rejected by the registry.
///
/// # Examples
/// ```
/// use signup::domain::RegistrationError;
///
/// let err = RegistrationError::EmailExists;
/// assert_eq!(err.to_string(), "email already exists");
/// assert_eq!(err.code(), "email_exists");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RegistrationError {
    /// Password shorter than the minimum length.
    #[error("password must be at least 8 characters long")]
    InvalidPassword,
    /// Email does not have the `local@domain.tld` shape.
    #[error("invalid email format")]
    InvalidEmail,
    /// Nickname length or characters are out of range.
    #[error("nickname must be 3-16 characters and can include letters, numbers, underscores, or hyphens")]
    InvalidNickname,
    /// A stored user already owns the email.
    #[error("email already exists")]
    EmailExists,
    /// A stored user already owns the nickname.
    #[error("nickname already exists")]
    NicknameExists,
}

impl RegistrationError {
    /// Stable machine-readable identifier, suitable for logs and metrics labels.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidPassword => "invalid_password",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidNickname => "invalid_nickname",
            Self::EmailExists => "email_exists",
            Self::NicknameExists => "nickname_exists",
        }
    }

    /// True when the candidate collided with an already stored user.
    #[must_use]
    pub fn is_conflict(self) -> bool {
        matches!(self, Self::EmailExists | Self::NicknameExists)
    }
}
