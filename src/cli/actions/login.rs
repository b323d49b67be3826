use crate::{
    auth::HttpAuthService,
    cli::{actions::drain_toasts, globals::GlobalArgs},
    forms::{LoginField, LoginFormController, Submission},
    notify::ChannelNotifier,
};
use anyhow::{anyhow, Result};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::info;

/// Handle the login action
///
/// # Errors
///
/// Returns an error if the server rejects the credentials or cannot be reached
pub async fn handle(email: String, password: &SecretString, globals: &GlobalArgs) -> Result<()> {
    let (notifier, mut toasts) = ChannelNotifier::new();
    let service = Arc::new(HttpAuthService::new(
        globals.api_url.clone(),
        Arc::new(notifier),
    )?);

    let mut form = LoginFormController::new(Arc::clone(&service));
    form.set_field(LoginField::Email, email);
    form.set_field(LoginField::Password, password.expose_secret());

    match form.submit() {
        Submission::Dispatched(handle) => handle.await?,
        Submission::Busy => return Err(anyhow!("a login is already in progress")),
        Submission::Rejected(err) => return Err(err.into()),
    }

    let last_error = drain_toasts(&mut toasts);

    let user = service
        .auth_user()
        .ok_or_else(|| anyhow!(last_error.unwrap_or_else(|| "login failed".to_string())))?;

    info!("signed in as {}", user["fullName"].as_str().unwrap_or_default());

    Ok(())
}
