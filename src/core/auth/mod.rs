//! Authentication core for Wardrobe
//!
//! This module provides the client-side auth machinery:
//! - Form state for the combined login/register page
//! - Submission dispatch against the backend auth API
//! - Error taxonomy and the field-keyed error-body contract
//! - Session token context and persistence

pub mod api;
pub mod error;
pub mod form;
pub mod session;

pub use api::{AuthEvent, Profile, fetch_profile, request_password_reset, submit_credentials};
pub use error::AuthError;
pub use form::{FormState, Mode, ResetDialog};
pub use session::{
    SessionContext, SessionState, provide_session_context, use_session_context,
};
