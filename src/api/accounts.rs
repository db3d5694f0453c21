//! Account Commands
//!
//! User accounts managed by the ICT administrator.

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{Account, AccountPayload};
use super::{delete, get, post_ack, put_ack, put_no_content};

#[derive(Serialize)]
struct AccountStatusArgs {
    is_active: bool,
}

pub async fn list_accounts() -> Result<Vec<Account>, ApiError> {
    get("/accounts").await
}

pub async fn create_account(payload: &AccountPayload) -> Result<Option<String>, ApiError> {
    post_ack("/accounts", payload).await
}

pub async fn update_account(id: u32, payload: &AccountPayload) -> Result<Option<String>, ApiError> {
    put_ack(&format!("/accounts/{}", id), payload).await
}

pub async fn set_account_active(id: u32, is_active: bool) -> Result<(), ApiError> {
    put_no_content(&format!("/accounts/{}/status", id), &AccountStatusArgs { is_active }).await
}

pub async fn delete_account(id: u32) -> Result<(), ApiError> {
    delete(&format!("/accounts/{}", id)).await
}
