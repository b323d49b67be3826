use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use url::Url;

/// Map validated CLI matches to an action and the shared arguments.
///
/// # Errors
///
/// Returns an error if the API URL is invalid or a required argument is missing
pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let api_url = matches
        .get_one::<String>("api-url")
        .context("missing required argument: --api-url")?;
    let api_url = Url::parse(api_url).with_context(|| format!("invalid API URL: {api_url}"))?;

    // Closure to pull a required string out of the subcommand matches
    let value = |sub_m: &clap::ArgMatches, name: &str| -> Result<String> {
        sub_m
            .get_one::<String>(name)
            .cloned()
            .ok_or_else(|| anyhow!("missing required argument: --{name}"))
    };

    let action = match matches.subcommand() {
        Some(("login", sub_m)) => Action::Login {
            email: value(sub_m, "email")?,
            password: SecretString::from(value(sub_m, "password")?),
        },
        Some(("signup", sub_m)) => Action::Signup {
            full_name: value(sub_m, "full-name")?,
            email: value(sub_m, "email")?,
            password: SecretString::from(value(sub_m, "password")?),
        },
        _ => return Err(anyhow!("unknown command")),
    };

    Ok((action, GlobalArgs::new(api_url)))
}
