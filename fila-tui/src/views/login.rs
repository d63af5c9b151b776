//! Login screen
//!
//! Staff entry point; a successful login routes by role to the barber or
//! admin dashboard.

use tui_input::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

/// State for the login screen
#[derive(Debug, Default)]
pub struct LoginView {
    pub username: Input,
    pub password: Input,
    pub focus: Option<LoginField>,
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginView {
    pub fn new() -> Self {
        Self {
            focus: Some(LoginField::Username),
            ..Self::default()
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Some(LoginField::Username) => Some(LoginField::Password),
            _ => Some(LoginField::Username),
        };
    }

    /// Credentials, once both fields hold something
    pub fn credentials(&self) -> Option<(String, String)> {
        let username = self.username.value().trim();
        let password = self.password.value();
        if username.is_empty() || password.is_empty() || self.submitting {
            return None;
        }
        Some((username.to_string(), password.to_string()))
    }

    /// A failed login keeps the fields editable for the retry
    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }
}
