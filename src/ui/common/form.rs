use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">{label}</label>
            <input
                type=input_type
                class="input-base"
                class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=disabled
            />
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="flex items-center text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}
