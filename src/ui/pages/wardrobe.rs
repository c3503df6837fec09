//! Wardrobe page component
//!
//! The main area behind login. Fetches the profile with the session's bearer
//! token and greets the user; anonymous visitors are sent back to the form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::auth::{Profile, SessionState, fetch_profile, use_session_context};
use crate::ui::icon::{Icon, icons};

/// Wardrobe (main area) page component
#[component]
pub fn WardrobePage() -> impl IntoView {
    let session = use_session_context();
    let profile = RwSignal::new(None::<Profile>);

    Effect::new(move |_| match session.state.get() {
        // Still restoring from localStorage, wait.
        SessionState::Unknown => {}
        SessionState::Anonymous => {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
        SessionState::Active(token) => {
            spawn_local(async move {
                if let Ok(p) = fetch_profile(&token).await {
                    profile.set(Some(p));
                }
            });
        }
    });

    let log_out = move |_| {
        session.clear();
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <div class="flex items-center gap-3">
                            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                                <Icon name=icons::HANGER class="w-5 h-5 text-white" />
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"Wardrobe"</span>
                        </div>

                        <button
                            class="px-4 py-2 rounded-lg text-theme-secondary hover:bg-theme-secondary transition-colors"
                            on:click=log_out
                        >
                            "Log out"
                        </button>
                    </div>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-theme-primary mb-2">
                        {move || match profile.get() {
                            Some(p) => format!("Welcome back, {}!", p.username),
                            None => "Welcome back!".to_string(),
                        }}
                    </h1>
                    <p class="text-theme-secondary">
                        "Your wardrobe is ready."
                    </p>
                </div>
            </main>
        </div>
    }
}
