//! reqwest-backed implementation of the task client port.

use crate::task::domain::{NewTask, Task, TaskId};
use crate::task::ports::{TaskClient, TaskClientError, TaskClientResult, TaskPatch};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default base URL of the task resource.
const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Default transport timeout ceiling.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport configuration for [`HttpTaskClient`].
///
/// Base URL and timeout ceiling are deployment configuration; the store's
/// contract does not depend on either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    base_url: String,
    timeout: Duration,
}

impl HttpClientConfig {
    /// Creates a configuration for the given base URL with the default
    /// timeout ceiling.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the transport timeout ceiling.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured timeout ceiling.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Task client speaking the `/todos` CRUD resource over HTTP.
///
/// Request and response bodies are JSON with camelCase field names. Any
/// non-success status code is reported as [`TaskClientError::Rejected`];
/// connection and decoding failures as [`TaskClientError::Transport`].
#[derive(Debug, Clone)]
pub struct HttpTaskClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskClient {
    /// Builds a client from transport configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError::Transport`] when the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: &HttpClientConfig) -> TaskClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(TaskClientError::transport)?;
        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_owned(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn entity_url(&self, id: &TaskId) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

/// Checks the response status and decodes a JSON body.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> TaskClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(TaskClientError::Rejected(status.as_u16()));
    }
    response.json().await.map_err(TaskClientError::transport)
}

#[async_trait]
impl TaskClient for HttpTaskClient {
    async fn list(&self) -> TaskClientResult<Vec<Task>> {
        tracing::debug!("fetching task collection");
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(TaskClientError::transport)?;
        decode(response).await
    }

    async fn create(&self, draft: &NewTask) -> TaskClientResult<Task> {
        tracing::debug!(title = %draft.title(), "creating task");
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(TaskClientError::transport)?;
        decode(response).await
    }

    async fn patch(&self, id: &TaskId, patch: &TaskPatch) -> TaskClientResult<Task> {
        tracing::debug!(%id, "patching task");
        let response = self
            .client
            .patch(self.entity_url(id))
            .json(patch)
            .send()
            .await
            .map_err(TaskClientError::transport)?;
        decode(response).await
    }

    async fn delete(&self, id: &TaskId) -> TaskClientResult<()> {
        tracing::debug!(%id, "deleting task");
        let response = self
            .client
            .delete(self.entity_url(id))
            .send()
            .await
            .map_err(TaskClientError::transport)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(TaskClientError::Rejected(status.as_u16()))
        }
    }
}
