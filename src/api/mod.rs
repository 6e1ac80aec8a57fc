mod http;

use async_trait::async_trait;
use crate::types::{NewTask, StatusUpdate, Task, TaskStats};
use crate::Result;

pub use http::HttpTaskApi;

/// The `/api/tasks` backend. Any non-success reply is an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    async fn create_task(&self, task: &NewTask) -> Result<()>;

    async fn update_task(&self, id: u64, update: &StatusUpdate) -> Result<()>;

    async fn delete_task(&self, id: u64) -> Result<()>;

    async fn stats(&self) -> Result<TaskStats>;
}
