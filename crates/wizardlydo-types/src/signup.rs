use serde::{Deserialize, Serialize};

use crate::validate::{MIN_PASSWORD_LEN, is_valid_email, is_valid_password};

/// Snapshot of the signup form.
///
/// The screen replaces the whole snapshot on every change; nothing mutates
/// in place. Error fields hold user-facing messages, `None` when clean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupState {
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub error: Option<String>,
}

impl SignupState {
    /// Next snapshot after an email keystroke. The stale field error goes
    /// with it; the next validation pass decides again.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self.email_error = None;
        self
    }

    /// Next snapshot after a password keystroke.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self.password_error = None;
        self
    }

    /// Runs both validators over the current fields and fills the field
    /// errors, `None` for a field that passes.
    pub fn validated(mut self) -> Self {
        self.email_error = if is_valid_email(&self.email) {
            None
        } else {
            Some("Enter a valid email address".to_string())
        };
        self.password_error = if is_valid_password(&self.password) {
            None
        } else {
            Some(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ))
        };
        self
    }

    /// Snapshot for an in-flight submit: loading, and no error carries over.
    pub fn submitting(mut self) -> Self {
        self.loading = true;
        self.email_error = None;
        self.password_error = None;
        self.error = None;
        self
    }

    /// Snapshot after the submit came back with a failure message.
    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.loading = false;
        self.error = Some(message.into());
        self
    }

    /// Both fields pass their validators.
    pub fn is_valid(&self) -> bool {
        is_valid_email(&self.email) && is_valid_password(&self.password)
    }
}
