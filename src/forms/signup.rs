use super::{
    copy::{FormCopy, SwitchLink, SIGNUP_COPY, SIGNUP_SWITCH},
    field::SignupField,
    state::SignupForm,
    validate::validate_signup,
    visibility::Visibility,
    SubmitState, Submission,
};
use crate::{
    auth::{AuthService, SignupProfile},
    notify::Notifier,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Signup form. Submissions pass the validation gate first; a failure is
/// shown through the notifier and nothing reaches the service.
pub struct SignupFormController<S> {
    service: Arc<S>,
    notifier: Arc<dyn Notifier>,
    form: SignupForm,
    visibility: Visibility,
}

impl<S: AuthService> SignupFormController<S> {
    pub fn new(service: Arc<S>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            notifier,
            form: SignupForm::default(),
            visibility: Visibility::default(),
        }
    }

    pub fn set_field(&mut self, field: SignupField, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    #[must_use]
    pub fn field(&self, field: SignupField) -> &str {
        self.form.get(field)
    }

    #[must_use]
    pub const fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn toggle_visibility(&mut self) {
        self.visibility.toggle();
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn render_password(&self) -> String {
        self.visibility.render(&self.form.password)
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.service.is_signing_up()
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        SubmitState::from_busy(self.is_busy())
    }

    #[must_use]
    pub const fn copy(&self) -> FormCopy {
        SIGNUP_COPY
    }

    #[must_use]
    pub const fn switch_link(&self) -> SwitchLink {
        SIGNUP_SWITCH
    }

    /// Validates the form and, if it passes, forwards it to the service.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime. The busy flag is released
    /// again before the panic unwinds out of this call.
    #[instrument(skip(self), fields(email = %self.form.email))]
    pub fn submit(&self) -> Submission {
        if self.is_busy() {
            debug!("signup already in flight");
            return Submission::Busy;
        }

        if let Err(err) = validate_signup(&self.form) {
            debug!("signup rejected: {}", err);
            self.notifier.error(&err.to_string());
            return Submission::Rejected(err);
        }

        let Some(guard) = self.service.signup_flag().try_claim() else {
            debug!("signup already in flight");
            return Submission::Busy;
        };

        let profile = SignupProfile {
            full_name: self.form.full_name.clone(),
            email: self.form.email.clone(),
            password: self.form.password.clone(),
        };
        let service = Arc::clone(&self.service);

        debug!("dispatching signup");

        Submission::Dispatched(tokio::spawn(async move {
            let _guard = guard;
            service.signup(profile).await;
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        forms::{mock::MockAuth, ValidationError},
        notify::{ChannelNotifier, Toast},
    };
    use anyhow::{bail, Result};
    use secrecy::ExposeSecret;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn controller(
        service: &Arc<MockAuth>,
    ) -> (SignupFormController<MockAuth>, UnboundedReceiver<Toast>) {
        let (notifier, rx) = ChannelNotifier::new();
        (
            SignupFormController::new(Arc::clone(service), Arc::new(notifier)),
            rx,
        )
    }

    fn fill(controller: &mut SignupFormController<MockAuth>, name: &str, email: &str, password: &str) {
        controller.set_field(SignupField::FullName, name);
        controller.set_field(SignupField::Email, email);
        controller.set_field(SignupField::Password, password);
    }

    #[tokio::test]
    async fn valid_form_is_forwarded_once() -> Result<()> {
        let service = Arc::new(MockAuth::default());
        let (mut controller, mut rx) = controller(&service);
        fill(&mut controller, "Jane Doe", "jane@example.com", "secret1");

        let Submission::Dispatched(handle) = controller.submit() else {
            bail!("signup was not dispatched");
        };
        handle.await?;

        let signups = service.signups();
        assert_eq!(signups.len(), 1);
        assert_eq!(signups[0].full_name, "Jane Doe");
        assert_eq!(signups[0].email, "jane@example.com");
        assert_eq!(signups[0].password.expose_secret(), "secret1");
        assert!(rx.try_recv().is_err());
        Ok(())
    }

    #[tokio::test]
    async fn blank_name_never_reaches_service() -> Result<()> {
        let service = Arc::new(MockAuth::default());
        let (mut controller, mut rx) = controller(&service);
        fill(&mut controller, "", "jane@example.com", "secret1");

        let submission = controller.submit();
        assert!(matches!(
            submission,
            Submission::Rejected(ValidationError::MissingField(SignupField::FullName))
        ));
        assert_eq!(rx.try_recv().ok(), Some(Toast::error("Full name is required")));
        assert!(rx.try_recv().is_err());

        tokio::task::yield_now().await;
        assert!(service.signups().is_empty());
        assert!(!controller.is_busy());
        Ok(())
    }

    #[tokio::test]
    async fn corrected_input_can_be_resubmitted() -> Result<()> {
        let service = Arc::new(MockAuth::default());
        let (mut controller, mut rx) = controller(&service);
        fill(&mut controller, "Jane Doe", "jane@example.com", "12345");

        assert!(matches!(controller.submit(), Submission::Rejected(_)));
        assert_eq!(
            rx.try_recv().ok(),
            Some(Toast::error("Password must be at least 6 characters"))
        );

        controller.set_field(SignupField::Password, "123456");
        let Submission::Dispatched(handle) = controller.submit() else {
            bail!("signup was not dispatched");
        };
        handle.await?;

        assert_eq!(service.signups().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn no_second_signup_while_busy() -> Result<()> {
        let service = Arc::new(MockAuth::held());
        let (mut controller, mut rx) = controller(&service);
        fill(&mut controller, "Jane Doe", "jane@example.com", "secret1");

        let Submission::Dispatched(handle) = controller.submit() else {
            bail!("signup was not dispatched");
        };
        assert_eq!(controller.state(), SubmitState::Submitting);
        assert!(matches!(controller.submit(), Submission::Busy));

        // busy wins over validation: nothing is shown while a request is pending
        controller.set_field(SignupField::FullName, "");
        assert!(matches!(controller.submit(), Submission::Busy));
        assert!(rx.try_recv().is_err());

        service.release();
        handle.await?;

        assert_eq!(service.signups().len(), 1);
        assert_eq!(controller.state(), SubmitState::Idle);
        Ok(())
    }

    #[tokio::test]
    async fn login_in_flight_does_not_block_signup() -> Result<()> {
        let service = Arc::new(MockAuth::default());
        let (mut controller, _rx) = controller(&service);
        fill(&mut controller, "Jane Doe", "jane@example.com", "secret1");

        let _login = service.login_flag().try_claim();
        assert!(controller.submit().is_dispatched());
        Ok(())
    }

    #[test]
    fn submit_outside_runtime_panics_and_releases_flag() {
        let service = Arc::new(MockAuth::default());
        let (mut controller, _rx) = controller(&service);
        fill(&mut controller, "Jane Doe", "jane@example.com", "secret1");

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| controller.submit()));

        assert!(result.is_err());
        assert_eq!(controller.state(), SubmitState::Idle);
        assert!(service.signups().is_empty());
    }

    #[test]
    fn toggle_twice_keeps_password() {
        let service = Arc::new(MockAuth::default());
        let (mut controller, _rx) = controller(&service);
        controller.set_field(SignupField::Password, "secret1");

        controller.toggle_visibility();
        assert_eq!(controller.visibility().input_kind(), "text");
        controller.toggle_visibility();

        assert_eq!(controller.visibility().input_kind(), "password");
        assert_eq!(controller.field(SignupField::Password), "secret1");
    }

    #[test]
    fn copy_and_link() {
        let service = Arc::new(MockAuth::default());
        let (controller, _rx) = controller(&service);
        assert_eq!(controller.copy().title, "Create Account");
        assert_eq!(controller.switch_link().label, "Sign in");
        assert_eq!(controller.switch_link().target.path(), "/login");
    }
}
