//! Password-reset request dialog.
//!
//! Shares the email field with the form behind it, the way the page works as
//! a whole: typing an email here fills it on the register variant too. A
//! failed request keeps the dialog open with the error inside it; a
//! successful one closes it and hands a `ResetPending` event to the page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::auth::{AuthEvent, FormState, request_password_reset};
use crate::ui::common::{BaseModal, ErrorMessage, FormField};

/// Forgot-password dialog component
#[component]
pub fn ForgotPasswordDialog(
    /// Shared form state; the dialog lives inside its login mode.
    form: RwSignal<FormState>,
    /// Outcome callback, forwarded to the page layer.
    #[prop(into)]
    on_event: Callback<AuthEvent>,
) -> impl IntoView {
    let busy = RwSignal::new(false);

    let close = Callback::new(move |_: ()| form.update(|f| f.close_reset_dialog()));

    let send = move |_| {
        if busy.get_untracked() {
            return;
        }

        let email = form.with_untracked(|f| f.email.clone());
        busy.set(true);

        spawn_local(async move {
            match request_password_reset(&email).await {
                Ok(event) => {
                    form.update(|f| f.close_reset_dialog());
                    on_event.run(event);
                }
                Err(err) => form.update(|f| f.set_dialog_error(err.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <BaseModal
            title="Reset your password".to_string()
            subtitle="We will email you a reset link.".to_string()
            is_open=Signal::derive(move || form.with(|f| f.dialog_open()))
            on_close=close
        >
            <div class="space-y-4">
                <FormField
                    label="E-mail".to_string()
                    input_type="email"
                    placeholder="you@example.com".to_string()
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.email = v))
                />

                <ErrorMessage error=Signal::derive(move || form.with(|f| f.dialog_error())) />

                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class="px-4 py-2 rounded-lg text-theme-primary hover:bg-theme-secondary transition-colors"
                        on:click=move |_| close.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-lg bg-accent-primary hover:bg-accent-primary-hover
                               text-white disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                        disabled=move || busy.get()
                        on:click=send
                    >
                        {move || if busy.get() { "Sending..." } else { "Send" }}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
