pub mod logging;

use crate::cli::globals::DEFAULT_API_URL;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

fn email_arg() -> Arg {
    Arg::new("email")
        .short('e')
        .long("email")
        .help("Account email")
        .env("CHATGATE_EMAIL")
        .required(true)
}

fn password_arg() -> Arg {
    Arg::new("password")
        .short('p')
        .long("password")
        .help("Account password")
        .env("CHATGATE_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("chatgate")
        .about("Sign in or create an account on the chat server")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("api-url")
                .short('u')
                .long("api-url")
                .help("Base URL of the chat API")
                .default_value(DEFAULT_API_URL)
                .env("CHATGATE_API_URL")
                .global(true),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in to your account")
                .arg(email_arg())
                .arg(password_arg()),
        )
        .subcommand(
            Command::new("signup")
                .about("Create an account")
                .arg(
                    Arg::new("full-name")
                        .short('n')
                        .long("full-name")
                        .help("Display name")
                        .env("CHATGATE_FULL_NAME")
                        .required(true),
                )
                .arg(email_arg())
                .arg(password_arg()),
        );

    logging::with_args(command)
}
