//! Inventory Commands
//!
//! CRUD over inventory items.

use crate::error::ApiError;
use crate::models::{InventoryItem, InventoryPayload};
use super::{delete, get, post_ack, put_ack};

pub async fn list_inventory() -> Result<Vec<InventoryItem>, ApiError> {
    get("/inventory").await
}

pub async fn get_inventory_item(id: u32) -> Result<InventoryItem, ApiError> {
    get(&format!("/inventory/{}", id)).await
}

pub async fn create_inventory_item(payload: &InventoryPayload) -> Result<Option<String>, ApiError> {
    post_ack("/inventory", payload).await
}

pub async fn update_inventory_item(id: u32, payload: &InventoryPayload) -> Result<Option<String>, ApiError> {
    put_ack(&format!("/inventory/{}", id), payload).await
}

pub async fn delete_inventory_item(id: u32) -> Result<(), ApiError> {
    delete(&format!("/inventory/{}", id)).await
}
