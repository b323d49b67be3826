//! Signup validation gate. Rules run in a fixed order and the first failure
//! wins, so the user only ever sees one message at a time.

use super::{field::SignupField, state::SignupForm};
use regex::Regex;
use secrecy::ExposeSecret;
use std::sync::LazyLock;
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Coarse `something@something.something` check; the server does the real one.
const EMAIL_SHAPE: &str = r"\S+@\S+\.\S+";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_SHAPE).ok());

/// Byte order mark; browsers strip it along with ordinary whitespace.
const BOM: char = '\u{feff}';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", missing_message(.0))]
    MissingField(SignupField),
    #[error("Invalid email format")]
    InvalidFormat,
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },
}

const fn missing_message(field: &SignupField) -> &'static str {
    match field {
        SignupField::FullName => "Full name is required",
        SignupField::Email => "Email is required",
        SignupField::Password => "Password is required",
    }
}

#[must_use]
pub fn valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().map_or(false, |re| re.is_match(email))
}

fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == BOM)
        .is_empty()
}

/// Checks the signup form and reports the first violated rule.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first rule that fails.
pub fn validate_signup(form: &SignupForm) -> Result<(), ValidationError> {
    if is_blank(&form.full_name) {
        return Err(ValidationError::MissingField(SignupField::FullName));
    }

    if is_blank(&form.email) {
        return Err(ValidationError::MissingField(SignupField::Email));
    }

    if !valid_email(&form.email) {
        return Err(ValidationError::InvalidFormat);
    }

    let password = form.password.expose_secret();
    if password.is_empty() {
        return Err(ValidationError::MissingField(SignupField::Password));
    }

    // counted in characters: an emoji is one character, not two
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}
