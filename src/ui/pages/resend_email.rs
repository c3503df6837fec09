//! Resend-email confirmation page.
//!
//! Landing spot after a successful registration or password-reset request.
//! The email and variant arrive as query parameters from the auth page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::ui::icon::{Icon, icons};

/// Confirmation page component for verification and reset-password emails
#[component]
pub fn ResendEmailPage() -> impl IntoView {
    let query = use_query_map();

    let email = move || query.with(|q| q.get("email").unwrap_or_default());
    let is_reset = move || {
        query.with(|q| q.get("version").as_deref() == Some("resetPassword"))
    };

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4">
            <div class="text-center max-w-md">
                <div class="w-24 h-24 mx-auto mb-6 bg-theme-secondary rounded-full flex items-center justify-center">
                    <Icon name=icons::MAIL class="w-12 h-12 text-theme-tertiary" />
                </div>

                <h1 class="text-2xl font-semibold text-theme-primary mb-2">
                    {move || {
                        if is_reset() { "Reset link sent" } else { "Verify your email" }
                    }}
                </h1>

                <p class="text-theme-secondary mb-2">
                    {move || {
                        if is_reset() {
                            "We sent a password-reset link to:"
                        } else {
                            "We sent a verification link to:"
                        }
                    }}
                </p>

                <p class="font-medium text-theme-primary mb-8">{email}</p>

                <p class="text-sm text-theme-tertiary mb-8">
                    "Check your inbox and follow the link. If it doesn't arrive within a few minutes, look in your spam folder."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                >
                    "Back to login"
                </A>
            </div>
        </div>
    }
}
