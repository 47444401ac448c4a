//! Sign-in / sign-up form.

use crate::models::{LoginCredentials, RegisterCredentials};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
}

impl LoginMode {
    pub fn title(&self) -> &'static str {
        match self {
            LoginMode::SignIn => "Sign in to your account",
            LoginMode::SignUp => "Create a new account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            LoginMode::SignIn => "Sign In",
            LoginMode::SignUp => "Sign Up",
        }
    }

    pub fn toggle_hint(&self) -> &'static str {
        match self {
            LoginMode::SignIn => "Don't have an account? Ctrl+T to sign up",
            LoginMode::SignUp => "Already have an account? Ctrl+T to sign in",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Email,
    Password,
}

/// What a submit asks the session store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login(LoginCredentials),
    Register(RegisterCredentials),
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub mode: LoginMode,
    pub username: String,
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
    submitting: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible fields in focus order.
    pub fn fields(&self) -> &'static [LoginField] {
        match self.mode {
            LoginMode::SignIn => &[LoginField::Username, LoginField::Password],
            LoginMode::SignUp => &[LoginField::Username, LoginField::Email, LoginField::Password],
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn focus_index(&self) -> usize {
        self.fields()
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    pub fn next_field(&mut self) {
        let fields = self.fields();
        self.focus = fields[(self.focus_index() + 1) % fields.len()];
    }

    pub fn prev_field(&mut self) {
        let fields = self.fields();
        self.focus = fields[(self.focus_index() + fields.len() - 1) % fields.len()];
    }

    pub fn toggle_mode(&mut self) {
        if self.submitting {
            return;
        }
        self.mode = match self.mode {
            LoginMode::SignIn => LoginMode::SignUp,
            LoginMode::SignUp => LoginMode::SignIn,
        };
        self.error = None;
        if !self.fields().contains(&self.focus) {
            self.focus = LoginField::Username;
        }
    }

    fn focused_value(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.submitting || c.is_control() {
            return;
        }
        self.focused_value().push(c);
    }

    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.submitting {
            self.focused_value().pop();
        }
    }

    /// Check required fields and build the request. Nothing is sent when a
    /// field is missing.
    pub fn submit(&mut self) -> Option<AuthRequest> {
        if self.submitting {
            return None;
        }

        let missing = if self.username.trim().is_empty() {
            Some("Username is required")
        } else if self.mode == LoginMode::SignUp && self.email.trim().is_empty() {
            Some("Email is required")
        } else if self.password.is_empty() {
            Some("Password is required")
        } else {
            None
        };
        if let Some(message) = missing {
            self.error = Some(message.to_string());
            return None;
        }

        self.error = None;
        self.submitting = true;
        let username = self.username.trim().to_string();
        Some(match self.mode {
            LoginMode::SignIn => AuthRequest::Login(LoginCredentials {
                username,
                password: self.password.clone(),
            }),
            LoginMode::SignUp => AuthRequest::Register(RegisterCredentials {
                username,
                email: self.email.trim().to_string(),
                password: self.password.clone(),
            }),
        })
    }

    /// Record a failed attempt. The password is kept so the user can retry.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    /// Reset after a successful sign-in, ready for the next logout.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_skips_email() {
        let mut form = LoginForm::new();
        form.next_field();
        assert_eq!(form.focus, LoginField::Password);
        form.next_field();
        assert_eq!(form.focus, LoginField::Username);
        form.prev_field();
        assert_eq!(form.focus, LoginField::Password);
    }

    #[test]
    fn test_sign_up_includes_email() {
        let mut form = LoginForm::new();
        form.toggle_mode();
        form.next_field();
        assert_eq!(form.focus, LoginField::Email);
    }

    #[test]
    fn test_toggle_moves_focus_off_hidden_email() {
        let mut form = LoginForm::new();
        form.toggle_mode();
        form.next_field();
        form.toggle_mode();
        assert_eq!(form.mode, LoginMode::SignIn);
        assert_eq!(form.focus, LoginField::Username);
    }

    #[test]
    fn test_required_fields() {
        let mut form = LoginForm::new();
        assert!(form.submit().is_none());
        assert_eq!(form.error.as_deref(), Some("Username is required"));

        form.insert_str("alice");
        assert!(form.submit().is_none());
        assert_eq!(form.error.as_deref(), Some("Password is required"));

        form.toggle_mode();
        form.focus = LoginField::Password;
        form.insert_str("pw");
        assert!(form.submit().is_none());
        assert_eq!(form.error.as_deref(), Some("Email is required"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_submit_login() {
        let mut form = LoginForm::new();
        form.insert_str("alice");
        form.next_field();
        form.insert_str("pw");

        let request = form.submit().unwrap();
        assert_eq!(
            request,
            AuthRequest::Login(LoginCredentials {
                username: "alice".to_string(),
                password: "pw".to_string(),
            })
        );
        assert!(form.is_submitting());
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_submit_register() {
        let mut form = LoginForm::new();
        form.toggle_mode();
        form.insert_str("bob");
        form.next_field();
        form.insert_str("b@x.com");
        form.next_field();
        form.insert_str("pw");

        assert!(matches!(form.submit(), Some(AuthRequest::Register(c)) if c.email == "b@x.com"));
    }

    #[test]
    fn test_fail_allows_retry() {
        let mut form = LoginForm::new();
        form.insert_str("alice");
        form.next_field();
        form.insert_str("pw");
        form.submit();

        form.fail("Invalid username or password.");
        assert!(!form.is_submitting());
        assert_eq!(form.error.as_deref(), Some("Invalid username or password."));
        assert_eq!(form.password, "pw");
        assert!(form.submit().is_some());
    }

    #[test]
    fn test_input_ignored_while_submitting() {
        let mut form = LoginForm::new();
        form.insert_str("alice");
        form.next_field();
        form.insert_str("pw");
        form.submit();

        form.insert_char('x');
        form.backspace();
        assert_eq!(form.password, "pw");
    }
}
