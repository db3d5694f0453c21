//! Profile Commands
//!
//! The signed-in user's own profile and password.

use crate::error::ApiError;
use crate::models::{PasswordPayload, Profile, ProfilePayload};
use super::{get, put_ack, put_no_content};

pub async fn get_profile() -> Result<Profile, ApiError> {
    get("/profile").await
}

pub async fn update_profile(payload: &ProfilePayload) -> Result<Option<String>, ApiError> {
    put_ack("/profile", payload).await
}

pub async fn change_password(payload: &PasswordPayload) -> Result<(), ApiError> {
    put_no_content("/profile/password", payload).await
}
