//! Static text and the cross-link between the two forms.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchLink {
    pub prompt: &'static str,
    pub label: &'static str,
    pub target: Route,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    pub busy_label: &'static str,
}

const BUSY_LABEL: &str = "Loading...";

pub const LOGIN_COPY: FormCopy = FormCopy {
    title: "Welcome Back",
    subtitle: "Sign in to your account",
    submit_label: "Sign in",
    busy_label: BUSY_LABEL,
};

pub const SIGNUP_COPY: FormCopy = FormCopy {
    title: "Create Account",
    subtitle: "Get started with your free account",
    submit_label: "Create Account",
    busy_label: BUSY_LABEL,
};

pub const LOGIN_SWITCH: SwitchLink = SwitchLink {
    prompt: "Don't have an account?",
    label: "Create account",
    target: Route::Signup,
};

pub const SIGNUP_SWITCH: SwitchLink = SwitchLink {
    prompt: "Already have an account?",
    label: "Sign in",
    target: Route::Login,
};

impl FormCopy {
    /// Text for the submit control given the current busy state.
    #[must_use]
    pub const fn submit_text(&self, busy: bool) -> &'static str {
        if busy {
            self.busy_label
        } else {
            self.submit_label
        }
    }
}
