//! Personnel Commands

use crate::error::ApiError;
use crate::models::{Personnel, PersonnelPayload};
use super::{delete, get, post_ack, put_ack};

pub async fn list_personnel() -> Result<Vec<Personnel>, ApiError> {
    get("/personnel").await
}

pub async fn create_personnel(payload: &PersonnelPayload) -> Result<Option<String>, ApiError> {
    post_ack("/personnel", payload).await
}

pub async fn update_personnel(id: u32, payload: &PersonnelPayload) -> Result<Option<String>, ApiError> {
    put_ack(&format!("/personnel/{}", id), payload).await
}

pub async fn delete_personnel(id: u32) -> Result<(), ApiError> {
    delete(&format!("/personnel/{}", id)).await
}
