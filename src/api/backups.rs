//! Backup Commands
//!
//! Database backup metadata, creation and download.

use crate::error::ApiError;
use crate::models::BackupRecord;
use super::{delete, download, get, post_ack};

pub async fn list_backups() -> Result<Vec<BackupRecord>, ApiError> {
    get("/backups").await
}

pub async fn create_backup() -> Result<Option<String>, ApiError> {
    post_ack("/backups", &serde_json::json!({})).await
}

pub async fn download_backup(id: u32) -> Result<web_sys::Blob, ApiError> {
    download(&format!("/backups/{}/download", id)).await
}

pub async fn delete_backup(id: u32) -> Result<(), ApiError> {
    delete(&format!("/backups/{}", id)).await
}
