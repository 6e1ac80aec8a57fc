use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use crate::config::ClientConfig;
use crate::error::TaskflowError;
use crate::types::{NewTask, StatusUpdate, Task, TaskStats};
use crate::Result;
use super::TaskApi;

#[derive(Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tasks_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn task_url(&self, id: u64) -> String {
        format!("{}/api/tasks/{}", self.base_url, id)
    }

    fn stats_url(&self) -> String {
        format!("{}/api/tasks/stats", self.base_url)
    }

    fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(TaskflowError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = Self::ensure_success(response)?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = self.tasks_url();
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::read_json(response).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<()> {
        let url = self.tasks_url();
        tracing::debug!("POST {} - Title: {}", url, task.title);
        let response = self.client.post(&url).json(task).send().await?;
        Self::ensure_success(response)?;
        Ok(())
    }

    async fn update_task(&self, id: u64, update: &StatusUpdate) -> Result<()> {
        let url = self.task_url(id);
        tracing::debug!("PUT {} - Status: {}", url, update.status);
        let response = self.client.put(&url).json(update).send().await?;
        Self::ensure_success(response)?;
        Ok(())
    }

    async fn delete_task(&self, id: u64) -> Result<()> {
        let url = self.task_url(id);
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::ensure_success(response)?;
        Ok(())
    }

    async fn stats(&self) -> Result<TaskStats> {
        let url = self.stats_url();
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::read_json(response).await
    }
}
