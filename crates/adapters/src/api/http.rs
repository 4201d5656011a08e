// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of the solver and history boundary

use super::{ApiError, HistoryApi, SolverApi};
use crate::env;
use async_trait::async_trait;
use reqwest::RequestBuilder;
use roster_core::{
    HistoryList, HistoryRecord, JobStatusUpdate, Quota, RenameRequest, RosteringRequest,
    SubmitReceipt, TaskId,
};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Connection settings for [`HttpApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl HttpApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Read `ROSTER_API_URL`, `ROSTER_API_TOKEN` and `ROSTER_TIMEOUT_HTTP_MS`.
    pub fn from_env() -> Self {
        Self {
            base_url: env::api_url(),
            token: env::api_token(),
            timeout: env::http_timeout(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// JSON-over-HTTP client for the solver service and history store.
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(config: HttpApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), body))
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        self.send(request).await?.json::<T>().await.map_err(classify)
    }
}

fn classify(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_decode() {
        ApiError::Decode(e.to_string())
    } else {
        ApiError::Transport(e.to_string())
    }
}

#[async_trait]
impl SolverApi for HttpApi {
    async fn submit(&self, request: &RosteringRequest) -> Result<SubmitReceipt, ApiError> {
        self.fetch(self.client.post(self.url("generate-schedule")).json(request))
            .await
    }

    async fn poll_status(&self, task_id: &TaskId) -> Result<JobStatusUpdate, ApiError> {
        let path = format!("schedule/{task_id}/status");
        self.fetch(self.client.get(self.url(&path))).await
    }

    async fn fetch_quota(&self) -> Result<Quota, ApiError> {
        self.fetch(self.client.get(self.url("quota"))).await
    }
}

#[async_trait]
impl HistoryApi for HttpApi {
    async fn list_history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        let list: HistoryList = self.fetch(self.client.get(self.url("my-history"))).await?;
        Ok(list.schedules)
    }

    async fn rename(&self, task_id: &TaskId, new_title: &str) -> Result<(), ApiError> {
        let path = format!("history/{task_id}/rename");
        let body = RenameRequest {
            new_title: new_title.to_string(),
        };
        self.send(self.client.post(self.url(&path)).json(&body))
            .await
            .map(drop)
    }

    async fn delete(&self, task_id: &TaskId) -> Result<(), ApiError> {
        let path = format!("history/{task_id}/delete");
        self.send(self.client.post(self.url(&path))).await.map(drop)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
