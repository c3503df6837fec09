//! Form state for the combined login/register page.
//!
//! The whole form is one plain value held in a single `RwSignal` by the UI.
//! Mode and the password-reset dialog are tagged unions so that impossible
//! combinations (dialog open while registering) cannot be constructed.

use super::error::AuthError;

/// State of the "forgot your password" dialog. Only exists in login mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResetDialog {
    #[default]
    Closed,
    /// Open, with its own error slot so a failed reset request is shown
    /// inside the dialog instead of on the form behind it.
    Open { error: Option<String> },
}

/// Which variant of the form is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Login { dialog: ResetDialog },
    Register,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Login {
            dialog: ResetDialog::Closed,
        }
    }
}

/// Field values and error slot for the login/register form.
///
/// Field values survive a mode switch; validation happens only on submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub mode: Mode,
    pub username: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
    pub error: Option<String>,
}

pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const MSG_PASSWORDS_MISMATCH: &str = "Passwords do not match.";

impl FormState {
    pub fn is_login(&self) -> bool {
        matches!(self.mode, Mode::Login { .. })
    }

    pub fn is_register(&self) -> bool {
        matches!(self.mode, Mode::Register)
    }

    /// Switch to the login variant. Clears the error, keeps field values.
    pub fn show_login(&mut self) {
        self.mode = Mode::Login {
            dialog: ResetDialog::Closed,
        };
        self.error = None;
    }

    /// Switch to the register variant. Clears the error, keeps field values.
    /// Any open reset dialog ceases to exist with the login mode.
    pub fn show_register(&mut self) {
        self.mode = Mode::Register;
        self.error = None;
    }

    /// Open the password-reset dialog. Only reachable from login mode;
    /// a no-op while registering.
    pub fn open_reset_dialog(&mut self) {
        if let Mode::Login { dialog } = &mut self.mode {
            *dialog = ResetDialog::Open { error: None };
        }
    }

    /// Close the dialog, discarding any error it was showing.
    pub fn close_reset_dialog(&mut self) {
        if let Mode::Login { dialog } = &mut self.mode {
            *dialog = ResetDialog::Closed;
        }
    }

    pub fn dialog_open(&self) -> bool {
        matches!(
            self.mode,
            Mode::Login {
                dialog: ResetDialog::Open { .. }
            }
        )
    }

    pub fn dialog_error(&self) -> Option<String> {
        match &self.mode {
            Mode::Login {
                dialog: ResetDialog::Open { error },
            } => error.clone(),
            _ => None,
        }
    }

    pub fn set_dialog_error(&mut self, message: String) {
        if let Mode::Login {
            dialog: ResetDialog::Open { error },
        } = &mut self.mode
        {
            *error = Some(message);
        }
    }

    /// Required-field and password-match checks, deferred to submit time.
    ///
    /// Email and repeat password are only required while registering, even
    /// though their values stay in state in login mode.
    pub fn validate(&self) -> Result<(), AuthError> {
        let register_incomplete =
            self.is_register() && (self.email.is_empty() || self.repeat_password.is_empty());

        if self.username.is_empty() || self.password.is_empty() || register_incomplete {
            return Err(AuthError::Validation(MSG_FILL_ALL_FIELDS.to_string()));
        }

        if self.is_register() && self.password != self.repeat_password {
            return Err(AuthError::Validation(MSG_PASSWORDS_MISMATCH.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_login() -> FormState {
        FormState {
            username: "alice".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        }
    }

    fn filled_register() -> FormState {
        FormState {
            mode: Mode::Register,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
            repeat_password: "secret".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_in_login_mode_with_dialog_closed() {
        let form = FormState::default();
        assert!(form.is_login());
        assert!(!form.dialog_open());
        assert!(form.error.is_none());
    }

    #[test]
    fn empty_username_fails_validation_in_both_modes() {
        let mut form = filled_login();
        form.username.clear();
        assert_eq!(
            form.validate(),
            Err(AuthError::Validation(MSG_FILL_ALL_FIELDS.to_string()))
        );

        let mut form = filled_register();
        form.username.clear();
        assert_eq!(
            form.validate(),
            Err(AuthError::Validation(MSG_FILL_ALL_FIELDS.to_string()))
        );
    }

    #[test]
    fn empty_password_fails_validation_in_both_modes() {
        let mut form = filled_login();
        form.password.clear();
        assert!(form.validate().is_err());

        let mut form = filled_register();
        form.password.clear();
        form.repeat_password.clear();
        assert_eq!(
            form.validate(),
            Err(AuthError::Validation(MSG_FILL_ALL_FIELDS.to_string()))
        );
    }

    #[test]
    fn login_does_not_require_email_or_repeat_password() {
        let form = filled_login();
        assert!(form.email.is_empty());
        assert!(form.repeat_password.is_empty());
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn register_requires_email_and_repeat_password() {
        let mut form = filled_register();
        form.email.clear();
        assert_eq!(
            form.validate(),
            Err(AuthError::Validation(MSG_FILL_ALL_FIELDS.to_string()))
        );

        let mut form = filled_register();
        form.repeat_password.clear();
        assert_eq!(
            form.validate(),
            Err(AuthError::Validation(MSG_FILL_ALL_FIELDS.to_string()))
        );
    }

    #[test]
    fn mismatched_passwords_fail_only_in_register_mode() {
        let mut form = filled_register();
        form.repeat_password = "different".to_string();
        assert_eq!(
            form.validate(),
            Err(AuthError::Validation(MSG_PASSWORDS_MISMATCH.to_string()))
        );

        // Login ignores repeat_password entirely.
        let mut form = filled_login();
        form.repeat_password = "different".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn valid_register_form_passes() {
        assert_eq!(filled_register().validate(), Ok(()));
    }

    #[test]
    fn mode_switch_clears_error_and_keeps_fields() {
        let mut form = filled_login();
        form.error = Some("old error".to_string());
        form.show_register();
        assert!(form.is_register());
        assert!(form.error.is_none());
        assert_eq!(form.username, "alice");
        assert_eq!(form.password, "secret");

        form.error = Some("another error".to_string());
        form.show_login();
        assert!(form.is_login());
        assert!(form.error.is_none());
        assert_eq!(form.username, "alice");
    }

    #[test]
    fn dialog_only_opens_in_login_mode() {
        let mut form = FormState::default();
        form.open_reset_dialog();
        assert!(form.dialog_open());

        let mut form = filled_register();
        form.open_reset_dialog();
        assert!(!form.dialog_open());
    }

    #[test]
    fn switching_to_register_closes_the_dialog() {
        let mut form = FormState::default();
        form.open_reset_dialog();
        form.show_register();
        assert!(!form.dialog_open());
        // Coming back to login does not resurrect it.
        form.show_login();
        assert!(!form.dialog_open());
    }

    #[test]
    fn dialog_error_lives_and_dies_with_the_dialog() {
        let mut form = FormState::default();
        form.open_reset_dialog();
        form.set_dialog_error("No account with this email.".to_string());
        assert_eq!(
            form.dialog_error(),
            Some("No account with this email.".to_string())
        );
        // The form-level error slot is untouched.
        assert!(form.error.is_none());

        form.close_reset_dialog();
        assert_eq!(form.dialog_error(), None);
        form.open_reset_dialog();
        assert_eq!(form.dialog_error(), None);
    }
}
