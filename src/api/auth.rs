//! Auth Commands
//!
//! Login and logout.

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse};
use super::{post, post_no_content};

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    post("/auth/login", &LoginRequest { username, password }).await
}

/// Best effort; the local session is cleared regardless of the outcome
pub async fn logout() -> Result<(), ApiError> {
    post_no_content("/auth/logout", &serde_json::json!({})).await
}
