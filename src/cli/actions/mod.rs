pub mod login;
pub mod signup;

use crate::notify::{Toast, ToastKind};
use secrecy::SecretString;
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Debug)]
pub enum Action {
    Login {
        email: String,
        password: SecretString,
    },
    Signup {
        full_name: String,
        email: String,
        password: SecretString,
    },
}

/// Print every toast queued so far. Returns the last error message, if any.
fn drain_toasts(toasts: &mut UnboundedReceiver<Toast>) -> Option<String> {
    let mut last_error = None;

    while let Ok(toast) = toasts.try_recv() {
        match toast.kind {
            ToastKind::Success => println!("{}", toast.message),
            ToastKind::Error => {
                eprintln!("{}", toast.message);
                last_error = Some(toast.message);
            }
        }
    }

    last_error
}
