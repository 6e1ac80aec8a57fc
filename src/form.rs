use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::error::TaskflowError;
use crate::types::{NewTask, TaskPriority, TaskStatus};
use crate::Result;

pub const FIELD_NAMES: [&str; 7] = [
    "title",
    "description",
    "priority",
    "assigned_to",
    "status",
    "due_date",
    "category",
];

/// Raw values of the task form controls, exactly as the user left them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub assigned_to: String,
    pub status: String,
    pub due_date: String,
    pub category: String,
}

impl Default for TaskForm {
    // Mirrors the initial state of the page form after a reset.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: TaskPriority::Medium.to_string(),
            assigned_to: String::new(),
            status: TaskStatus::Pending.to_string(),
            due_date: String::new(),
            category: String::new(),
        }
    }
}

impl TaskForm {
    pub fn new(title: impl Into<String>, assigned_to: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            assigned_to: assigned_to.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Applies the checks the form controls themselves enforce: required
    /// inputs, select options and the date picker format. Free text is sent
    /// untouched, empty strings included.
    pub fn into_new_task(self) -> Result<NewTask> {
        if self.title.is_empty() {
            return Err(TaskflowError::invalid_form("title", "a title is required"));
        }
        if self.assigned_to.is_empty() {
            return Err(TaskflowError::invalid_form("assigned_to", "an assignee is required"));
        }

        let priority = self.priority.parse::<TaskPriority>()?;
        let status = self.status.parse::<TaskStatus>()?;

        if !self.due_date.is_empty() {
            NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").map_err(|e| {
                TaskflowError::invalid_form("due_date", format!("expected YYYY-MM-DD: {}", e))
            })?;
        }

        Ok(NewTask {
            title: self.title,
            description: self.description,
            priority,
            assigned_to: self.assigned_to,
            status,
            due_date: self.due_date,
            category: self.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_optional_fields_are_sent() {
        let form = TaskForm::new("Fix bug", "Alice")
            .with_priority("high")
            .with_status("pending")
            .with_category("bug");

        let body = serde_json::to_value(form.into_new_task().unwrap()).unwrap();
        let object = body.as_object().unwrap();

        for field in FIELD_NAMES {
            assert!(object.contains_key(field), "missing field {}", field);
        }
        assert_eq!(object.len(), FIELD_NAMES.len());
        assert_eq!(body["description"], "");
        assert_eq!(body["due_date"], "");
        assert_eq!(body["priority"], "high");
    }

    #[test]
    fn test_required_fields() {
        let err = TaskForm::new("", "Alice").into_new_task().unwrap_err();
        assert!(matches!(err, TaskflowError::InvalidForm { field: "title", .. }));

        let err = TaskForm::new("Fix bug", "").into_new_task().unwrap_err();
        assert!(matches!(err, TaskflowError::InvalidForm { field: "assigned_to", .. }));
    }

    #[test]
    fn test_blank_text_satisfies_required() {
        let task = TaskForm::new("   ", " ").into_new_task().unwrap();
        assert_eq!(task.title, "   ");
        assert_eq!(task.assigned_to, " ");
    }

    #[test]
    fn test_due_date_must_be_a_calendar_date() {
        let err = TaskForm::new("Fix bug", "Alice")
            .with_due_date("next friday")
            .into_new_task()
            .unwrap_err();
        assert!(matches!(err, TaskflowError::InvalidForm { field: "due_date", .. }));

        let task = TaskForm::new("Fix bug", "Alice")
            .with_due_date("2025-11-15")
            .into_new_task()
            .unwrap();
        assert_eq!(task.due_date, "2025-11-15");
    }

    #[test]
    fn test_select_values_are_checked() {
        let err = TaskForm::new("Fix bug", "Alice")
            .with_priority("critical")
            .into_new_task()
            .unwrap_err();
        assert!(matches!(err, TaskflowError::InvalidForm { field: "priority", .. }));
    }
}
