use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};
use crate::error::TaskflowError;

/// A task as returned by `GET /api/tasks`. The backend owns every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assigned_to: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

// The backend stores whatever a client PUTs, nulls included.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    /// Anything the backend sends outside the known set, kept for display.
    Other(String),
}

impl TaskPriority {
    pub fn as_str(&self) -> &str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Other(raw) => raw,
        }
    }
}

impl From<String> for TaskPriority {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "low" => TaskPriority::Low,
            "medium" => TaskPriority::Medium,
            "high" => TaskPriority::High,
            _ => TaskPriority::Other(raw),
        }
    }
}

impl From<TaskPriority> for String {
    fn from(priority: TaskPriority) -> Self {
        match priority {
            TaskPriority::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

// Form selects only offer the known values.
impl FromStr for TaskPriority {
    type Err = TaskflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match TaskPriority::from(s.to_string()) {
            TaskPriority::Other(raw) => Err(TaskflowError::invalid_form(
                "priority",
                format!("'{}' is not one of low, medium, high", raw),
            )),
            known => Ok(known),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Other(raw) => raw,
        }
    }

    /// Next step of the status cycle. Unknown values restart the cycle.
    pub fn next(&self) -> TaskStatus {
        match self {
            TaskStatus::Pending => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Completed,
            _ => TaskStatus::Pending,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => TaskStatus::Pending,
            "in_progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Other(raw),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = TaskflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match TaskStatus::from(s.to_string()) {
            TaskStatus::Other(raw) => Err(TaskflowError::invalid_form(
                "status",
                format!("'{}' is not one of pending, in_progress, completed", raw),
            )),
            known => Ok(known),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/tasks`. Every field is always serialized, empty or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub assigned_to: String,
    pub status: TaskStatus,
    pub due_date: String,
    pub category: String,
}

/// Body of `PUT /api/tasks/{id}` when advancing the status cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: TaskStatus,
}

/// Aggregates computed by `GET /api/tasks/stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub high_priority: u64,
    #[serde(default)]
    pub completed: u64,
}
