//! Login and signup form controllers.
//!
//! Each controller owns its field values and the password visibility toggle.
//! Submitting hands the values to an [`AuthService`](crate::auth::AuthService)
//! on a spawned task and returns immediately; the controller learns about
//! progress only through the service's busy flag.

pub mod copy;
pub mod field;
mod login;
#[cfg(test)]
mod mock;
mod signup;
pub mod state;
pub mod validate;
mod visibility;

pub use copy::{FormCopy, Route, SwitchLink};
pub use field::{LoginField, SignupField, UnknownField};
pub use login::LoginFormController;
pub use signup::SignupFormController;
pub use state::{LoginForm, SignupForm};
pub use validate::{validate_signup, ValidationError, MIN_PASSWORD_LENGTH};
pub use visibility::Visibility;

use tokio::task::JoinHandle;

/// What happened to a submit action.
#[derive(Debug)]
pub enum Submission {
    /// The request is on its way; the handle resolves when the service is done.
    Dispatched(JoinHandle<()>),
    /// A request of the same kind is still in flight, nothing was sent.
    Busy,
    /// The validation gate refused the form, nothing was sent.
    Rejected(ValidationError),
}

impl Submission {
    #[must_use]
    pub const fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

impl SubmitState {
    const fn from_busy(busy: bool) -> Self {
        if busy {
            Self::Submitting
        } else {
            Self::Idle
        }
    }
}
