//! REST API Wrappers
//!
//! Frontend bindings to the inventory backend, organized by resource.
//! All calls go through `send`, which attaches the bearer token and maps
//! non-2xx responses to `ApiError`.

mod auth;
mod inventory;
mod assignments;
mod personnel;
mod schools;
mod accounts;
mod backups;
mod profile;

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session;

// Re-export all public items
pub use auth::*;
pub use inventory::*;
pub use assignments::*;
pub use personnel::*;
pub use schools::*;
pub use accounts::*;
pub use backups::*;
pub use profile::*;

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

fn config() -> &'static ApiConfig {
    CONFIG.get_or_init(ApiConfig::load)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

fn js_err(e: JsValue) -> ApiError {
    ApiError::Network(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// Issue one request; a 401 clears the stored session before returning
async fn send(method: Method, path: &str, body: Option<String>) -> Result<Response, ApiError> {
    let url = config().url(path);

    let init = RequestInit::new();
    init.set_method(method.as_str());
    init.set_mode(RequestMode::Cors);
    if let Some(body) = body.as_deref() {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &init).map_err(js_err)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(js_err)?;
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(js_err)?;
    }
    if let Some(current) = session::load() {
        headers.set("Authorization", &current.bearer()).map_err(js_err)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| ApiError::Decode("fetch did not return a Response".to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let text = read_text(&response).await.unwrap_or_default();
    let err = ApiError::from_response(status, &text);
    web_sys::console::error_1(&format!("[Api] {} {} -> {}: {}", method.as_str(), path, status, err).into());
    if err.is_unauthorized() {
        session::clear();
    }
    Err(err)
}

async fn read_text(response: &Response) -> Result<String, ApiError> {
    let promise = response.text().map_err(js_err)?;
    let value = JsFuture::from(promise).await.map_err(js_err)?;
    Ok(value.as_string().unwrap_or_default())
}

/// Decode a JSON body, unwrapping a `{"data": ...}` envelope when present
fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<T>(text) {
        Ok(value) => Ok(value),
        Err(direct) => {
            let json: Value =
                serde_json::from_str(text).map_err(|_| ApiError::Decode(direct.to_string()))?;
            match json.get("data") {
                Some(inner) => serde_json::from_value(inner.clone())
                    .map_err(|e| ApiError::Decode(e.to_string())),
                None => Err(ApiError::Decode(direct.to_string())),
            }
        }
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send(Method::Get, path, None).await?;
    decode(&read_text(&response).await?)
}

async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = send(Method::Post, path, Some(encode(body)?)).await?;
    decode(&read_text(&response).await?)
}

/// Confirmation text in a mutation response; empty or record bodies have none
fn ack_message(text: &str) -> Option<String> {
    let json: Value = serde_json::from_str(text).ok()?;
    json.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// POST a mutation; the body is only read for a confirmation message
async fn post_ack<B: Serialize>(path: &str, body: &B) -> Result<Option<String>, ApiError> {
    let response = send(Method::Post, path, Some(encode(body)?)).await?;
    Ok(ack_message(&read_text(&response).await.unwrap_or_default()))
}

async fn put_ack<B: Serialize>(path: &str, body: &B) -> Result<Option<String>, ApiError> {
    let response = send(Method::Put, path, Some(encode(body)?)).await?;
    Ok(ack_message(&read_text(&response).await.unwrap_or_default()))
}

/// PUT whose response body is ignored
async fn put_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send(Method::Put, path, Some(encode(body)?)).await.map(|_| ())
}

async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send(Method::Post, path, Some(encode(body)?)).await.map(|_| ())
}

async fn delete(path: &str) -> Result<(), ApiError> {
    send(Method::Delete, path, None).await.map(|_| ())
}

/// GET a binary body as a Blob
async fn download(path: &str) -> Result<web_sys::Blob, ApiError> {
    let response = send(Method::Get, path, None).await?;
    let promise = response.blob().map_err(js_err)?;
    let value = JsFuture::from(promise).await.map_err(js_err)?;
    value
        .dyn_into::<web_sys::Blob>()
        .map_err(|_| ApiError::Decode("download did not return a Blob".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::School;

    #[test]
    fn test_decode_plain_and_enveloped() {
        let plain = r#"[{"id":1,"school_code":"301234","name":"Rizal High School"}]"#;
        let schools: Vec<School> = decode(plain).unwrap();
        assert_eq!(schools[0].name, "Rizal High School");

        let wrapped = r#"{"data":[{"id":2,"school_code":"301235","name":"Mabini ES"}],"total":1}"#;
        let schools: Vec<School> = decode(wrapped).unwrap();
        assert_eq!(schools[0].id, 2);
    }

    #[test]
    fn test_ack_message_tolerates_any_success_body() {
        assert_eq!(ack_message(""), None);
        assert_eq!(ack_message(r#"{"message":"Item saved"}"#).as_deref(), Some("Item saved"));
        assert_eq!(ack_message(r#"{"id":7,"name":"Rizal High School"}"#), None);
        assert_eq!(ack_message(r#"{"message":"  "}"#), None);
        assert_eq!(ack_message("OK"), None);
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let result: Result<Vec<School>, _> = decode("not json");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
