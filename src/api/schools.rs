//! School Commands

use crate::error::ApiError;
use crate::models::{School, SchoolPayload};
use super::{delete, get, post_ack, put_ack};

pub async fn list_schools() -> Result<Vec<School>, ApiError> {
    get("/schools").await
}

pub async fn create_school(payload: &SchoolPayload) -> Result<Option<String>, ApiError> {
    post_ack("/schools", payload).await
}

pub async fn update_school(id: u32, payload: &SchoolPayload) -> Result<Option<String>, ApiError> {
    put_ack(&format!("/schools/{}", id), payload).await
}

pub async fn delete_school(id: u32) -> Result<(), ApiError> {
    delete(&format!("/schools/{}", id)).await
}
