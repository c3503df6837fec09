//! Error taxonomy for auth submissions.
//!
//! Every failure ends up as a single human-readable message in a form or
//! dialog error slot; nothing propagates past the submission that caused it.

use serde_json::Value;
use thiserror::Error;

/// What went wrong with a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Local required-field or password-match failure, detected before any
    /// network call.
    #[error("{0}")]
    Validation(String),

    /// The server rejected the submission with a field-keyed error body;
    /// carries the first field's first message.
    #[error("{0}")]
    Server(String),

    /// The server responded with something we could not interpret.
    #[error("Something went wrong.")]
    Unexpected,

    /// No response was received at all.
    #[error("Connection error. Please try again later.")]
    Network,
}

/// Interpret an error response body.
///
/// The backend reports validation failures as a mapping from field name to an
/// ordered list of messages, e.g. `{"username": ["This field is required."]}`.
/// The contract is to surface the first field's first message; anything else
/// collapses to [`AuthError::Unexpected`].
pub fn from_error_body(body: &Value) -> AuthError {
    match first_field_message(body) {
        Some(message) => AuthError::Server(message),
        None => AuthError::Unexpected,
    }
}

fn first_field_message(body: &Value) -> Option<String> {
    let fields = body.as_object()?;
    let (_, messages) = fields.iter().next()?;
    let first = messages.as_array()?.first()?;
    first.as_str().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn surfaces_first_message_of_field_keyed_body() {
        let body = json!({"username": ["This field is required."]});
        assert_eq!(
            from_error_body(&body),
            AuthError::Server("This field is required.".to_string())
        );
    }

    #[test]
    fn takes_first_field_in_body_order() {
        // serde_json is built with preserve_order, so the first field is the
        // first one the server wrote, not the alphabetically smallest.
        let body = json!({
            "zeta": ["zeta message"],
            "alpha": ["alpha message"]
        });
        assert_eq!(
            from_error_body(&body),
            AuthError::Server("zeta message".to_string())
        );
    }

    #[test]
    fn skips_later_messages_of_the_first_field() {
        let body = json!({"password": ["Too short.", "Too common."]});
        assert_eq!(
            from_error_body(&body),
            AuthError::Server("Too short.".to_string())
        );
    }

    #[test]
    fn unstructured_bodies_collapse_to_unexpected() {
        assert_eq!(from_error_body(&json!("server exploded")), AuthError::Unexpected);
        assert_eq!(from_error_body(&json!(null)), AuthError::Unexpected);
        assert_eq!(from_error_body(&json!({})), AuthError::Unexpected);
        // Field present but not an array of strings.
        assert_eq!(
            from_error_body(&json!({"detail": "Not found."})),
            AuthError::Unexpected
        );
        assert_eq!(
            from_error_body(&json!({"username": [42]})),
            AuthError::Unexpected
        );
    }

    #[test]
    fn generic_messages_are_stable() {
        assert_eq!(AuthError::Unexpected.to_string(), "Something went wrong.");
        assert_eq!(
            AuthError::Network.to_string(),
            "Connection error. Please try again later."
        );
    }
}
