//! Application pages module
//!
//! This module contains the page components for the application:
//! - Auth page (login/register, "/")
//! - Wardrobe (main area after login)
//! - Resend-email confirmation page
//! - 404 page

mod auth;
mod not_found;
mod resend_email;
mod wardrobe;

pub use auth::AuthPage;
pub use not_found::NotFoundPage;
pub use resend_email::ResendEmailPage;
pub use wardrobe::WardrobePage;
