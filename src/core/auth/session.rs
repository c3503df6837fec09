//! Session context holding the access token for the browser session.
//!
//! The token is an explicit context object passed through the component tree
//! rather than ambient global client state, so pages and tests can reason
//! about who owns it. It is persisted to localStorage and restored after
//! hydration.

use leptos::prelude::*;

/// Where the session stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Not yet restored from localStorage (pre-hydration).
    #[default]
    Unknown,
    /// No token held.
    Anonymous,
    /// A login issued this access token.
    Active(String),
}

/// Reactive session handle provided at the app root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
}

const STORAGE_KEY_TOKEN: &str = "wardrobe_access_token";

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), SessionState::Active(_))
    }

    /// Current access token, if any.
    /// Uses `get_untracked()` since callers attach it to outgoing requests
    /// outside reactive contexts.
    pub fn token(&self) -> Option<String> {
        match self.state.get_untracked() {
            SessionState::Active(token) => Some(token),
            _ => None,
        }
    }

    /// Adopt a freshly issued token and persist it for the session.
    pub fn store(&self, access: String) {
        save_to_storage(&access);
        self.state.set(SessionState::Active(access));
    }

    /// Drop the session, locally and from storage.
    pub fn clear(&self) {
        clear_storage();
        self.state.set(SessionState::Anonymous);
    }
}

/// Provide the session context to the component tree.
pub fn provide_session_context() -> SessionContext {
    // Start Unknown on both server and client to avoid hydration mismatch;
    // the client resolves it from localStorage right after hydration.
    let state = RwSignal::new(SessionState::Unknown);
    let ctx = SessionContext { state };

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| match load_from_storage() {
            Some(token) => state.set(SessionState::Active(token)),
            None => state.set(SessionState::Anonymous),
        });
    }

    provide_context(ctx);
    ctx
}

/// Get the session context from the component tree.
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(not(feature = "ssr"))]
fn load_from_storage() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(STORAGE_KEY_TOKEN).ok()?
}

#[cfg(not(feature = "ssr"))]
fn save_to_storage(access: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY_TOKEN, access);
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn clear_storage() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY_TOKEN);
        }
    }
}

#[cfg(feature = "ssr")]
fn save_to_storage(_access: &str) {}

#[cfg(feature = "ssr")]
fn clear_storage() {}
