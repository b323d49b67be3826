use super::{
    copy::{FormCopy, SwitchLink, LOGIN_COPY, LOGIN_SWITCH},
    field::LoginField,
    state::LoginForm,
    visibility::Visibility,
    SubmitState, Submission,
};
use crate::auth::{AuthService, Credentials};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Login form. Does no validation of its own; the service decides whether
/// the credentials are any good.
pub struct LoginFormController<S> {
    service: Arc<S>,
    form: LoginForm,
    visibility: Visibility,
}

impl<S: AuthService> LoginFormController<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            form: LoginForm::default(),
            visibility: Visibility::default(),
        }
    }

    pub fn set_field(&mut self, field: LoginField, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    #[must_use]
    pub fn field(&self, field: LoginField) -> &str {
        self.form.get(field)
    }

    #[must_use]
    pub const fn form(&self) -> &LoginForm {
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
        self.service.is_logging_in()
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        SubmitState::from_busy(self.is_busy())
    }

    #[must_use]
    pub const fn copy(&self) -> FormCopy {
        LOGIN_COPY
    }

    #[must_use]
    pub const fn switch_link(&self) -> SwitchLink {
        LOGIN_SWITCH
    }

    /// Forwards the current email and password to the service.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime. The busy flag is released
    /// again before the panic unwinds out of this call.
    #[instrument(skip(self), fields(email = %self.form.email))]
    pub fn submit(&self) -> Submission {
        let Some(guard) = self.service.login_flag().try_claim() else {
            debug!("login already in flight");
            return Submission::Busy;
        };

        let credentials = Credentials {
            email: self.form.email.clone(),
            password: self.form.password.clone(),
        };
        let service = Arc::clone(&self.service);

        debug!("dispatching login");

        Submission::Dispatched(tokio::spawn(async move {
            let _guard = guard;
            service.login(credentials).await;
        }))
    }
}
