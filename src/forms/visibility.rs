//! Show/hide toggle for the password input. Only affects how the value is
//! rendered; the stored secret is never touched.

use secrecy::{ExposeSecret, SecretString};

const MASK: char = '•';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    shown: bool,
}

impl Visibility {
    pub fn toggle(&mut self) {
        self.shown = !self.shown;
    }

    #[must_use]
    pub const fn is_shown(self) -> bool {
        self.shown
    }

    /// The `type` attribute the password input should carry.
    #[must_use]
    pub const fn input_kind(self) -> &'static str {
        if self.shown {
            "text"
        } else {
            "password"
        }
    }

    /// Clear text when shown, one mask character per character otherwise.
    #[must_use]
    pub fn render(self, secret: &SecretString) -> String {
        let secret = secret.expose_secret();
        if self.shown {
            secret.to_string()
        } else {
            std::iter::repeat(MASK).take(secret.chars().count()).collect()
        }
    }
}
