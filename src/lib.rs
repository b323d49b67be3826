//! Form controllers for the chat client's login and signup screens.
//!
//! The controllers own field state and the password visibility toggle, gate
//! signup behind a fail-fast validator, and hand submissions to an
//! [`auth::AuthService`]. The service owns the busy flags; a controller only
//! claims them, so a form can never have two requests of the same kind in
//! flight.

pub mod auth;
pub mod cli;
pub mod forms;
pub mod notify;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
