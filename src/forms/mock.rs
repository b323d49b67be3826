//! Recording auth service for controller tests.

use crate::auth::{AuthService, BusyFlag, Credentials, SignupProfile};
use std::sync::{Mutex, PoisonError};
use tokio::sync::Notify;

#[derive(Default)]
pub(crate) struct MockAuth {
    logging_in: BusyFlag,
    signing_up: BusyFlag,
    logins: Mutex<Vec<Credentials>>,
    signups: Mutex<Vec<SignupProfile>>,
    hold: bool,
    gate: Notify,
}

impl MockAuth {
    /// Requests stay in flight until [`MockAuth::release`] is called.
    pub(crate) fn held() -> Self {
        Self {
            hold: true,
            ..Self::default()
        }
    }

    pub(crate) fn release(&self) {
        self.gate.notify_one();
    }

    pub(crate) fn logins(&self) -> Vec<Credentials> {
        self.logins
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn signups(&self) -> Vec<SignupProfile> {
        self.signups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn wait(&self) {
        if self.hold {
            self.gate.notified().await;
        }
    }
}

impl AuthService for MockAuth {
    fn login_flag(&self) -> &BusyFlag {
        &self.logging_in
    }

    fn signup_flag(&self) -> &BusyFlag {
        &self.signing_up
    }

    async fn login(&self, credentials: Credentials) {
        self.logins
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(credentials);
        self.wait().await;
    }

    async fn signup(&self, profile: SignupProfile) {
        self.signups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(profile);
        self.wait().await;
    }
}
