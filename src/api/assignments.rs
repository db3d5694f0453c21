//! Assignment Commands
//!
//! Items issued to teachers.

use crate::error::ApiError;
use crate::models::{AssignedItem, AssignmentPayload, ConditionPayload};
use super::{delete, get, post_ack, put_ack};

pub async fn list_assigned_items() -> Result<Vec<AssignedItem>, ApiError> {
    get("/assigned-items").await
}

/// Items assigned to the signed-in teacher
pub async fn list_my_items() -> Result<Vec<AssignedItem>, ApiError> {
    get("/assigned-items/mine").await
}

pub async fn assign_item(payload: &AssignmentPayload) -> Result<Option<String>, ApiError> {
    post_ack("/assigned-items", payload).await
}

pub async fn report_condition(id: u32, payload: &ConditionPayload) -> Result<Option<String>, ApiError> {
    put_ack(&format!("/assigned-items/{}/condition", id), payload).await
}

/// Return an assigned item to stock
pub async fn return_item(id: u32) -> Result<(), ApiError> {
    delete(&format!("/assigned-items/{}", id)).await
}
