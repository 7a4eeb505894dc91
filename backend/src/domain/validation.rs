//! Shape rules applied to a candidate before uniqueness is checked.
//!
//! Each rule is a format check only. The patterns are deliberately permissive
//! and do not attempt RFC 5321 compliance.

use std::sync::OnceLock;

use regex::Regex;

use super::{RegistrationError, User};

/// Minimum password length, counted in bytes of the UTF-8 encoding.
pub const PASSWORD_MIN_LEN: usize = 8;

/// `local-part@domain.tld` with a final label of two or more letters.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Three to sixteen letters, digits, underscores, or hyphens.
pub const NICKNAME_PATTERN: &str = r"^[a-zA-Z0-9_-]{3,16}$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static NICKNAME_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(EMAIL_PATTERN)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn nickname_regex() -> &'static Regex {
    NICKNAME_RE.get_or_init(|| {
        Regex::new(NICKNAME_PATTERN)
            .unwrap_or_else(|error| panic!("nickname regex failed to compile: {error}"))
    })
}

/// Reject passwords shorter than [`PASSWORD_MIN_LEN`] bytes.
pub fn validate_password(password: &str) -> Result<(), RegistrationError> {
    if password.len() < PASSWORD_MIN_LEN {
        return Err(RegistrationError::InvalidPassword);
    }
    Ok(())
}

/// Reject emails that do not match [`EMAIL_PATTERN`].
pub fn validate_email(email: &str) -> Result<(), RegistrationError> {
    if !email_regex().is_match(email) {
        return Err(RegistrationError::InvalidEmail);
    }
    Ok(())
}

/// Reject nicknames that do not match [`NICKNAME_PATTERN`].
pub fn validate_nickname(nickname: &str) -> Result<(), RegistrationError> {
    if !nickname_regex().is_match(nickname) {
        return Err(RegistrationError::InvalidNickname);
    }
    Ok(())
}

/// Run the shape rules in order: password, email, nickname.
///
/// The first failing rule wins; later rules are not evaluated.
///
/// # Examples
/// ```
/// use signup::domain::{RegistrationError, User, validation::validate_shape};
///
/// let short = User::new("!!", "not-an-email", "short");
/// assert_eq!(validate_shape(&short), Err(RegistrationError::InvalidPassword));
/// ```
pub fn validate_shape(candidate: &User) -> Result<(), RegistrationError> {
    validate_password(candidate.password())?;
    validate_email(candidate.email())?;
    validate_nickname(candidate.nickname())
}
