//! Authentication UI module
//!
//! Components for the combined login/register page and the
//! password-reset dialog.

mod auth_form;
mod forgot_dialog;

pub use auth_form::AuthForm;
pub use forgot_dialog::ForgotPasswordDialog;
