//! Field values for each form. Created empty when the view mounts, replaced on
//! every keystroke, dropped with the controller.

use super::field::{LoginField, SignupField};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = SecretString::from(value),
        }
    }

    #[must_use]
    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => self.password.expose_secret(),
        }
    }
}

impl SignupForm {
    pub fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::FullName => self.full_name = value,
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = SecretString::from(value),
        }
    }

    #[must_use]
    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::FullName => &self.full_name,
            SignupField::Email => &self.email,
            SignupField::Password => self.password.expose_secret(),
        }
    }
}
