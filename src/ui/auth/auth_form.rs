//! Combined login/register form.
//!
//! One card with a pill toggle between the two modes. Field values survive a
//! mode switch; the error message does not. Validation runs at submit time
//! and the first failure, local or server-side, lands in the error slot.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::auth::{AuthEvent, FormState, submit_credentials};
use crate::ui::common::{ErrorMessage, FormField};
use crate::ui::icon::{Icon, icons};

use super::forgot_dialog::ForgotPasswordDialog;

/// Login/register form component
#[component]
pub fn AuthForm(
    /// Callback with the outcome of a successful submission; the page layer
    /// stores tokens and navigates.
    #[prop(into)]
    on_event: Callback<AuthEvent>,
) -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    // One outstanding submission at a time.
    let busy = RwSignal::new(false);

    let is_login = move || form.with(|f| f.is_login());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if busy.get_untracked() {
            return;
        }

        form.update(|f| f.error = None);

        let snapshot = form.get_untracked();
        busy.set(true);

        spawn_local(async move {
            match submit_credentials(&snapshot).await {
                Ok(event) => on_event.run(event),
                Err(err) => form.update(|f| f.error = Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    let pill = move |login: bool, text: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if is_login() == login {
                        "flex-1 py-1.5 rounded-full bg-accent-primary text-white transition-colors"
                    } else {
                        "flex-1 py-1.5 rounded-full text-theme-primary transition-colors"
                    }
                }
                on:click=move |_| {
                    form.update(|f| if login { f.show_login() } else { f.show_register() });
                }
            >
                {text}
            </button>
        }
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-6">
                // Mode toggle pill
                <div class="flex bg-theme-secondary rounded-full p-1 mx-4 select-none">
                    {pill(true, "Log in")}
                    {pill(false, "Register")}
                </div>

                <FormField
                    label="Username".to_string()
                    placeholder="Username".to_string()
                    value=Signal::derive(move || form.with(|f| f.username.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.username = v))
                />

                <Show when=move || !is_login()>
                    <FormField
                        label="E-mail".to_string()
                        input_type="email"
                        placeholder="you@example.com".to_string()
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                    />
                </Show>

                <FormField
                    label="Password".to_string()
                    input_type="password"
                    placeholder="Password".to_string()
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.password = v))
                />

                <Show when=move || !is_login()>
                    <FormField
                        label="Repeat password".to_string()
                        input_type="password"
                        placeholder="Repeat password".to_string()
                        value=Signal::derive(move || form.with(|f| f.repeat_password.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.repeat_password = v))
                    />
                </Show>

                // Forgot-password entry point, login mode only
                <Show when=is_login>
                    <button
                        type="button"
                        class="text-sm text-theme-secondary underline hover:text-accent-primary"
                        on:click=move |_| form.update(|f| f.open_reset_dialog())
                    >
                        "Forgot your password?"
                    </button>
                </Show>

                <ErrorMessage error=Signal::derive(move || form.with(|f| f.error.clone())) />

                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                           text-white font-bold rounded-full
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                    disabled=move || busy.get()
                >
                    {move || {
                        if busy.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4 text-white" />
                                    "Submitting..."
                                </span>
                            }.into_any()
                        } else if is_login() {
                            view! { <span class="block">"Log in"</span> }.into_any()
                        } else {
                            view! { <span class="block">"Register"</span> }.into_any()
                        }
                    }}
                </button>
            </form>

            <ForgotPasswordDialog form=form on_event=on_event />
        </div>
    }
}
