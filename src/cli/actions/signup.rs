use crate::{
    auth::HttpAuthService,
    cli::{actions::drain_toasts, globals::GlobalArgs},
    forms::{SignupField, SignupFormController, Submission},
    notify::{ChannelNotifier, Notifier},
};
use anyhow::{anyhow, Result};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::info;

/// Handle the signup action
///
/// # Errors
///
/// Returns an error if the form is invalid or the server refuses the account
pub async fn handle(
    full_name: String,
    email: String,
    password: &SecretString,
    globals: &GlobalArgs,
) -> Result<()> {
    let (notifier, mut toasts) = ChannelNotifier::new();
    let notifier: Arc<dyn Notifier> = Arc::new(notifier);
    let service = Arc::new(HttpAuthService::new(
        globals.api_url.clone(),
        Arc::clone(&notifier),
    )?);

    let mut form = SignupFormController::new(Arc::clone(&service), notifier);
    form.set_field(SignupField::FullName, full_name);
    form.set_field(SignupField::Email, email);
    form.set_field(SignupField::Password, password.expose_secret());

    match form.submit() {
        Submission::Dispatched(handle) => handle.await?,
        Submission::Busy => return Err(anyhow!("a signup is already in progress")),
        Submission::Rejected(err) => return Err(err.into()),
    }

    let last_error = drain_toasts(&mut toasts);

    let user = service
        .auth_user()
        .ok_or_else(|| anyhow!(last_error.unwrap_or_else(|| "signup failed".to_string())))?;

    info!("created account for {}", user["email"].as_str().unwrap_or_default());

    Ok(())
}
