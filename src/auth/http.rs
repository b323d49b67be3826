//! `AuthService` backed by the chat API over HTTP.
//!
//! Login and signup POST JSON to `{api}/auth/login` and `{api}/auth/signup`.
//! On success the returned user document becomes the current session; either
//! way the result is reported as a toast. Passwords are exposed only while the
//! request body is built and are never logged.

use super::{AuthService, BusyFlag, Credentials, SignupProfile};
use crate::{notify::Notifier, APP_USER_AGENT};
use anyhow::{anyhow, Result};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error, instrument};
use url::Url;

pub struct HttpAuthService {
    client: Client,
    api_url: Url,
    notifier: Arc<dyn Notifier>,
    logging_in: BusyFlag,
    signing_up: BusyFlag,
    auth_user: RwLock<Option<Value>>,
}

impl HttpAuthService {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_url: Url, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let client = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self {
            client,
            api_url,
            notifier,
            logging_in: BusyFlag::new(),
            signing_up: BusyFlag::new(),
            auth_user: RwLock::new(None),
        })
    }

    /// The user document returned by the last successful login or signup.
    #[must_use]
    pub fn auth_user(&self) -> Option<Value> {
        self.auth_user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let base = self.api_url.as_str().trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');

        Ok(Url::parse(&format!("{base}/{endpoint}"))?)
    }

    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value> {
        let url = self.endpoint_url(endpoint)?;

        debug!("POST {}", url);

        let response = self.client.post(url.clone()).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let json_response: Value = response.json().await.unwrap_or(Value::Null);

            return Err(anyhow!(
                "{}",
                json_response["message"]
                    .as_str()
                    .map_or_else(|| format!("{url} - {status}"), str::to_string)
            ));
        }

        Ok(response.json().await?)
    }

    fn finish(&self, result: Result<Value>, success_message: &str) {
        match result {
            Ok(user) => {
                *self
                    .auth_user
                    .write()
                    .unwrap_or_else(PoisonError::into_inner) = Some(user);
                self.notifier.success(success_message);
            }
            Err(e) => {
                error!("{}", e);
                self.notifier.error(&e.to_string());
            }
        }
    }
}

impl AuthService for HttpAuthService {
    fn login_flag(&self) -> &BusyFlag {
        &self.logging_in
    }

    fn signup_flag(&self) -> &BusyFlag {
        &self.signing_up
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn login(&self, credentials: Credentials) {
        let body = json!({
            "email": credentials.email,
            "password": credentials.password.expose_secret(),
        });

        let result = self.post("/auth/login", &body).await;
        self.finish(result, "Logged in successfully");
    }

    #[instrument(skip(self, profile), fields(email = %profile.email))]
    async fn signup(&self, profile: SignupProfile) {
        let body = json!({
            "fullName": profile.full_name,
            "email": profile.email,
            "password": profile.password.expose_secret(),
        });

        let result = self.post("/auth/signup", &body).await;
        self.finish(result, "Account created successfully");
    }
}
