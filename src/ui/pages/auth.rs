//! Auth page component
//!
//! The landing route: hosts the login/register form and maps its outcomes to
//! session storage and navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::auth::{AuthEvent, use_session_context};
use crate::ui::auth::AuthForm;

fn resend_email_url(email: &str, version: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("email", email)
        .append_pair("version", version)
        .finish();
    format!("/resend-email?{query}")
}

/// Login/register page component
#[component]
pub fn AuthPage() -> impl IntoView {
    let session = use_session_context();

    // Skip the form when a session already exists
    Effect::new(move |_| {
        if session.is_authenticated() {
            let navigate = use_navigate();
            navigate("/wardrobe", Default::default());
        }
    });

    let on_event = move |event: AuthEvent| {
        let navigate = use_navigate();
        match event {
            AuthEvent::LoggedIn { access } => {
                session.store(access);
                navigate("/wardrobe", Default::default());
            }
            AuthEvent::VerificationPending { email } => {
                navigate(&resend_email_url(&email, "verification"), Default::default());
            }
            AuthEvent::ResetPending { email } => {
                navigate(&resend_email_url(&email, "resetPassword"), Default::default());
            }
        }
    };

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <AuthForm on_event=Callback::new(on_event) />
                </div>
            </main>

            <footer class="py-4 border-t border-theme">
                <p class="text-center text-sm text-theme-tertiary">
                    "© 2026 Wardrobe. All rights reserved."
                </p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resend_url_carries_email_and_version() {
        assert_eq!(
            resend_email_url("a@b.com", "verification"),
            "/resend-email?email=a%40b.com&version=verification"
        );
    }

    #[test]
    fn resend_url_encodes_reset_variant() {
        assert_eq!(
            resend_email_url("x+y@z.pl", "resetPassword"),
            "/resend-email?email=x%2By%40z.pl&version=resetPassword"
        );
    }
}
