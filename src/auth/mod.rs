//! The authentication collaborator the form controllers submit to.
//!
//! A service owns one [`BusyFlag`] per request kind. Controllers read the
//! flags to disable their submit control and claim them right before they
//! dispatch, so a form never has two logins (or two signups) in flight. What
//! happens after dispatch, including error reporting, is up to the service.

mod busy;
pub mod http;

pub use busy::{BusyFlag, BusyGuard};
pub use http::HttpAuthService;

use secrecy::SecretString;
use std::future::Future;

/// Login payload, forwarded exactly as typed.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

/// Signup payload, forwarded once the validation gate has passed.
#[derive(Debug, Clone)]
pub struct SignupProfile {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
}

pub trait AuthService: Send + Sync + 'static {
    fn login_flag(&self) -> &BusyFlag;

    fn signup_flag(&self) -> &BusyFlag;

    fn is_logging_in(&self) -> bool {
        self.login_flag().is_set()
    }

    fn is_signing_up(&self) -> bool {
        self.signup_flag().is_set()
    }

    /// Performs the login request. Outcome handling stays inside the service.
    fn login(&self, credentials: Credentials) -> impl Future<Output = ()> + Send;

    /// Performs the signup request. Outcome handling stays inside the service.
    fn signup(&self, profile: SignupProfile) -> impl Future<Output = ()> + Send;
}
