//! Group task data models

use super::require_non_empty;
use crate::error::CliResult;
use serde::{Deserialize, Serialize};

/// A task assigned to a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub task_name: String,
    #[serde(alias = "task_description")]
    pub description: String,
    /// Display string as entered, e.g. `2024-12-09`
    pub due_date: String,
    #[serde(default)]
    pub group_id: Option<i64>,
}

/// Body for creating or editing a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    pub task_name: String,
    pub description: String,
    pub due_date: String,
}

impl TaskPayload {
    /// Build a payload; every field is required
    pub fn new(task_name: &str, description: &str, due_date: &str) -> CliResult<Self> {
        Ok(Self {
            task_name: require_non_empty("Task name", task_name)?,
            description: require_non_empty("Task description", description)?,
            due_date: require_non_empty("Due date", due_date)?,
        })
    }
}
