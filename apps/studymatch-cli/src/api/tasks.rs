//! Task API client methods
//!
//! Task writes answer with the owning group so callers can redraw it.

use super::{ApiClient, ApiResult};
use crate::models::{Group, TaskPayload};

impl ApiClient {
    /// Add a task to a group
    pub async fn add_task(&self, group_id: i64, task: &TaskPayload) -> ApiResult<Group> {
        self.create(&format!("/groups/{group_id}/tasks/"), task).await
    }

    /// Replace a task's fields
    pub async fn update_task(&self, task_id: i64, task: &TaskPayload) -> ApiResult<Group> {
        self.update(&format!("/tasks/{task_id}/"), task).await
    }

    /// Delete a task
    pub async fn delete_task(&self, task_id: i64) -> ApiResult<()> {
        self.delete(&format!("/tasks/{task_id}/")).await
    }
}
