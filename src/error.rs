//! API Errors
//!
//! Every backend failure is sorted into one of the categories the UI reacts to:
//! session loss, request failure, or field validation.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Ordered field name -> message map shown inline under form inputs
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("session expired")]
    Unauthorized,
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed: {message}")]
    Validation { message: String, fields: FieldErrors },
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response
    pub fn from_response(status: u16, body: &str) -> Self {
        let json: Option<Value> = serde_json::from_str(body).ok();
        let message = json
            .as_ref()
            .and_then(body_message)
            .unwrap_or_else(|| format!("Request failed ({})", status));

        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            400 | 422 => {
                let fields = json.as_ref().map(body_field_errors).unwrap_or_default();
                if fields.is_empty() && status == 400 {
                    ApiError::Server { status, message }
                } else {
                    ApiError::Validation { message, fields }
                }
            }
            _ => ApiError::Server { status, message },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Field errors echoed by the backend, if any
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            ApiError::Validation { fields, .. } => fields.clone(),
            _ => FieldErrors::new(),
        }
    }

    /// Text for the toast shown to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Validation { message: msg, .. }
            | ApiError::Server { message: msg, .. } => msg.clone(),
            ApiError::Network(_) => "Unable to reach the server. Check your connection.".to_string(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
        }
    }
}

fn body_message(json: &Value) -> Option<String> {
    ["message", "detail", "error"]
        .iter()
        .find_map(|key| json.get(*key).and_then(Value::as_str))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn body_field_errors(json: &Value) -> FieldErrors {
    let Some(errors) = json.get("errors").and_then(Value::as_object) else {
        return FieldErrors::new();
    };
    errors
        .iter()
        .filter_map(|(field, value)| {
            let msg = match value {
                Value::String(s) => Some(s.clone()),
                Value::Array(list) => list.iter().find_map(Value::as_str).map(str::to_string),
                _ => None,
            }?;
            Some((field.clone(), msg))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_is_unauthorized() {
        let err = ApiError::from_response(401, r#"{"message":"Token expired"}"#);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_message_fallback_order() {
        let err = ApiError::from_response(500, r#"{"detail":"db down"}"#);
        assert_eq!(err.user_message(), "db down");

        let err = ApiError::from_response(502, "<html>bad gateway</html>");
        assert_eq!(err.user_message(), "Request failed (502)");
    }

    #[test]
    fn test_validation_fields_accept_string_or_list() {
        let body = r#"{
            "message": "Invalid data",
            "errors": {"email": ["Email already taken", "ignored"], "username": "Too short"}
        }"#;
        let err = ApiError::from_response(422, body);
        let fields = err.field_errors();
        assert_eq!(fields.get("email").map(String::as_str), Some("Email already taken"));
        assert_eq!(fields.get("username").map(String::as_str), Some("Too short"));
        assert_eq!(err.user_message(), "Invalid data");
    }

    #[test]
    fn test_plain_400_is_server_error() {
        let err = ApiError::from_response(400, r#"{"error":"Invalid credentials"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: "Invalid credentials".to_string()
            }
        );
    }
}
