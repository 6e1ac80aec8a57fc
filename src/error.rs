use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskflowError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid form field '{field}': {reason}")]
    InvalidForm { field: &'static str, reason: String },

    #[error("Task {0} not found")]
    TaskNotFound(u64),

    #[error("A task submission is already in flight")]
    SubmitInProgress,

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl TaskflowError {
    pub fn invalid_form(field: &'static str, reason: impl Into<String>) -> Self {
        TaskflowError::InvalidForm {
            field,
            reason: reason.into(),
        }
    }
}

impl From<String> for TaskflowError {
    fn from(msg: String) -> Self {
        TaskflowError::Config(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = TaskflowError::Status {
            status: 503,
            url: "http://localhost:5000/api/tasks".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request to http://localhost:5000/api/tasks failed with status 503"
        );
    }

    #[test]
    fn test_decode_error_from_serde() {
        let parse = serde_json::from_str::<Vec<u64>>("not json").unwrap_err();
        let err: TaskflowError = parse.into();
        assert!(matches!(err, TaskflowError::Decode(_)));
    }
}
