//! User account model.

use std::fmt;

use zeroize::Zeroizing;

const SAMPLE_NICKNAME: &str = "user";
const SAMPLE_EMAIL: &str = "test@example.com";
const SAMPLE_PASSWORD: &str = "F9DXIK6hvuFINjmC";

/// Candidate or stored account record.
///
/// Constructing a `User` performs no validation; the registry decides
/// whether a candidate may be admitted.
///
/// ## Invariants
/// - Once stored, a user is never mutated or removed.
/// - The password is kept as provided and compared as-is.
///
/// # Examples
/// ```
/// use signup::domain::User;
///
/// let user = User::new("ada", "ada@example.com", "correct horse");
/// assert_eq!(user.nickname(), "ada");
/// assert!(!format!("{user:?}").contains("correct horse"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    nickname: String,
    email: String,
    password: Zeroizing<String>,
}

impl User {
    /// Build a user from its three text fields.
    #[must_use]
    pub fn new(
        nickname: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// The pre-existing account every default registry starts with.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(SAMPLE_NICKNAME, SAMPLE_EMAIL, SAMPLE_PASSWORD)
    }

    /// Identity handle, unique among stored users.
    #[must_use]
    pub fn nickname(&self) -> &str {
        self.nickname.as_str()
    }

    /// Contact address, unique among stored users.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plaintext credential.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("nickname", &self.nickname)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
