//! Field names for the two forms. Inputs bind to these instead of raw strings
//! so an unknown key is rejected where it is parsed, not where it is stored.

use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    FullName,
    Email,
    Password,
}

impl LoginField {
    pub const ALL: [Self; 2] = [Self::Email, Self::Password];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Label and placeholder shown next to the input.
    #[must_use]
    pub const fn label(self) -> (&'static str, &'static str) {
        match self {
            Self::Email => ("Email", "you@example.com"),
            Self::Password => ("Password", "••••••••"),
        }
    }
}

impl SignupField {
    pub const ALL: [Self; 3] = [Self::FullName, Self::Email, Self::Password];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Label and placeholder shown next to the input.
    #[must_use]
    pub const fn label(self) -> (&'static str, &'static str) {
        match self {
            Self::FullName => ("Full Name", "John Doe"),
            Self::Email => ("Email", "you@example.com"),
            Self::Password => ("Password", "••••••••"),
        }
    }
}

impl fmt::Display for LoginField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl fmt::Display for SignupField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for LoginField {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            _ => Err(UnknownField(name.to_string())),
        }
    }
}

impl FromStr for SignupField {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "fullName" | "full_name" => Ok(Self::FullName),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            _ => Err(UnknownField(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_field_accepts_both_spellings_of_full_name() {
        assert_eq!("fullName".parse::<SignupField>(), Ok(SignupField::FullName));
        assert_eq!("full_name".parse::<SignupField>(), Ok(SignupField::FullName));
    }

    #[test]
    fn login_form_has_no_name_field() {
        assert_eq!(
            "fullName".parse::<LoginField>(),
            Err(UnknownField("fullName".to_string()))
        );
    }

    #[test]
    fn labels_match_the_inputs() {
        assert_eq!(SignupField::FullName.label(), ("Full Name", "John Doe"));
        assert_eq!(LoginField::Email.label().1, "you@example.com");
    }

    #[test]
    fn wire_names_parse_back() {
        for field in SignupField::ALL {
            assert_eq!(field.as_str().parse::<SignupField>(), Ok(field));
        }
        for field in LoginField::ALL {
            assert_eq!(field.to_string().parse::<LoginField>(), Ok(field));
        }
    }
}
