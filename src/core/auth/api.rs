//! Auth API client.
//!
//! Three credentialed POSTs against the backend auth service: token obtain
//! (login), registration, and password-reset request. Response interpretation
//! is kept as pure functions of `(status ok, body)` so the whole dispatch
//! policy is testable natively; only the thin fetch wrapper is client-only.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{self, AuthError};
use super::form::FormState;

const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Base URL of the auth backend. Overridable at build time so deployments
/// can point the bundle at a different host.
pub fn api_base() -> &'static str {
    option_env!("WARDROBE_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Absolute URL for an API path.
pub fn endpoint(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Successful submission outcome, consumed by the page layer which owns
/// token storage and navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// Login succeeded; carries the access token to store for the session.
    LoggedIn { access: String },
    /// Registration succeeded; a verification email is on its way.
    VerificationPending { email: String },
    /// Password-reset request succeeded; a reset link is on its way.
    ResetPending { email: String },
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct ResetRequest<'a> {
    email: &'a str,
}

/// Profile payload served to authenticated users.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub profile_picture: Option<String>,
}

/// Interpret the token-obtain response. Success carries the `access` token.
pub fn interpret_login(ok: bool, body: &Value) -> Result<AuthEvent, AuthError> {
    if !ok {
        return Err(error::from_error_body(body));
    }
    body.get("access")
        .and_then(Value::as_str)
        .map(|access| AuthEvent::LoggedIn {
            access: access.to_owned(),
        })
        .ok_or(AuthError::Unexpected)
}

/// Interpret the registration response.
pub fn interpret_register(ok: bool, body: &Value, email: &str) -> Result<AuthEvent, AuthError> {
    if !ok {
        return Err(error::from_error_body(body));
    }
    Ok(AuthEvent::VerificationPending {
        email: email.to_owned(),
    })
}

/// Interpret the password-reset-request response.
pub fn interpret_reset(ok: bool, body: &Value, email: &str) -> Result<AuthEvent, AuthError> {
    if !ok {
        return Err(error::from_error_body(body));
    }
    Ok(AuthEvent::ResetPending {
        email: email.to_owned(),
    })
}

/// Validate the form, post the mode-appropriate payload, and interpret the
/// response. Every failure is terminal; the caller shows the message and
/// waits for the next user action.
#[cfg(not(feature = "ssr"))]
pub async fn submit_credentials(form: &FormState) -> Result<AuthEvent, AuthError> {
    form.validate()?;

    if form.is_login() {
        let payload = LoginRequest {
            username: &form.username,
            password: &form.password,
        };
        let (ok, body) = post_json("/api/token/", &payload).await?;
        interpret_login(ok, &body)
    } else {
        let payload = RegisterRequest {
            username: &form.username,
            email: &form.email,
            password: &form.password,
        };
        let (ok, body) = post_json("/api/register/", &payload).await?;
        interpret_register(ok, &body, &form.email)
    }
}

#[cfg(feature = "ssr")]
pub async fn submit_credentials(form: &FormState) -> Result<AuthEvent, AuthError> {
    // Credential submission only happens in the browser.
    form.validate()?;
    Err(AuthError::Unexpected)
}

/// Ask the backend to email a password-reset link.
#[cfg(not(feature = "ssr"))]
pub async fn request_password_reset(email: &str) -> Result<AuthEvent, AuthError> {
    let (ok, body) = post_json("/api/password-reset-request/", &ResetRequest { email }).await?;
    interpret_reset(ok, &body, email)
}

#[cfg(feature = "ssr")]
pub async fn request_password_reset(_email: &str) -> Result<AuthEvent, AuthError> {
    Err(AuthError::Unexpected)
}

/// Fetch the current user's profile with the session's bearer token.
#[cfg(not(feature = "ssr"))]
pub async fn fetch_profile(access_token: &str) -> Result<Profile, AuthError> {
    use gloo_net::http::Request;

    let response = Request::get(&endpoint("/api/profile/"))
        .header("Authorization", &format!("Bearer {access_token}"))
        .send()
        .await
        .map_err(|_| AuthError::Network)?;

    if !response.ok() {
        return Err(AuthError::Unexpected);
    }

    response
        .json::<Profile>()
        .await
        .map_err(|_| AuthError::Unexpected)
}

#[cfg(feature = "ssr")]
pub async fn fetch_profile(_access_token: &str) -> Result<Profile, AuthError> {
    Err(AuthError::Unexpected)
}

/// POST a JSON payload with credentials (cookies) included and return the
/// status outcome together with the parsed body. A transport failure is
/// [`AuthError::Network`]; an unparsable body is handed to interpretation as
/// `null` so it falls out as [`AuthError::Unexpected`] there.
#[cfg(not(feature = "ssr"))]
async fn post_json<T: Serialize>(path: &str, payload: &T) -> Result<(bool, Value), AuthError> {
    use gloo_net::http::Request;
    use web_sys::RequestCredentials;

    let request = Request::post(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .json(payload)
        .map_err(|_| AuthError::Unexpected)?;

    let response = request.send().await.map_err(|_| AuthError::Network)?;
    let ok = response.ok();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    Ok((ok, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_payload_carries_username_and_password_only() {
        let payload = LoginRequest {
            username: "alice",
            password: "secret",
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"username": "alice", "password": "secret"})
        );
    }

    #[test]
    fn register_payload_adds_email() {
        let payload = RegisterRequest {
            username: "alice",
            email: "a@b.com",
            password: "secret",
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"username": "alice", "email": "a@b.com", "password": "secret"})
        );
    }

    #[test]
    fn reset_payload_is_just_the_email() {
        assert_eq!(
            serde_json::to_value(ResetRequest { email: "a@b.com" }).unwrap(),
            json!({"email": "a@b.com"})
        );
    }

    #[test]
    fn successful_login_yields_the_access_token() {
        let body = json!({"access": "tok123", "refresh": "ref456"});
        assert_eq!(
            interpret_login(true, &body),
            Ok(AuthEvent::LoggedIn {
                access: "tok123".to_string()
            })
        );
    }

    #[test]
    fn login_body_without_access_token_is_unexpected() {
        assert_eq!(interpret_login(true, &json!({})), Err(AuthError::Unexpected));
        assert_eq!(
            interpret_login(true, &json!({"access": 7})),
            Err(AuthError::Unexpected)
        );
    }

    #[test]
    fn failed_login_surfaces_first_field_message() {
        let body = json!({"username": ["This field is required."]});
        assert_eq!(
            interpret_login(false, &body),
            Err(AuthError::Server("This field is required.".to_string()))
        );
    }

    #[test]
    fn failed_login_with_unparsable_body_is_unexpected() {
        assert_eq!(
            interpret_login(false, &Value::Null),
            Err(AuthError::Unexpected)
        );
    }

    #[test]
    fn successful_register_reports_verification_pending() {
        assert_eq!(
            interpret_register(true, &json!({"id": 1}), "a@b.com"),
            Ok(AuthEvent::VerificationPending {
                email: "a@b.com".to_string()
            })
        );
    }

    #[test]
    fn failed_register_surfaces_first_field_message() {
        let body = json!({
            "email": ["Enter a valid email address."],
            "password": ["This password is too common."]
        });
        assert_eq!(
            interpret_register(false, &body, "a@b.com"),
            Err(AuthError::Server("Enter a valid email address.".to_string()))
        );
    }

    #[test]
    fn successful_reset_reports_reset_pending() {
        assert_eq!(
            interpret_reset(true, &json!({"status": "reset link sent"}), "a@b.com"),
            Ok(AuthEvent::ResetPending {
                email: "a@b.com".to_string()
            })
        );
    }

    #[test]
    fn failed_reset_surfaces_first_field_message() {
        let body = json!({"email": ["No active account with this email."]});
        assert_eq!(
            interpret_reset(false, &body, "a@b.com"),
            Err(AuthError::Server(
                "No active account with this email.".to_string()
            ))
        );
    }

    #[test]
    fn endpoints_join_base_and_path() {
        assert_eq!(
            endpoint("/api/token/"),
            format!("{}/api/token/", api_base())
        );
    }
}
