use reqwest::{Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use worklog_api::handlers::{
    user::UserPayload, worklog::WorklogEntry, ErrorResponse, MessageResponse,
};
use worklog_core::{TimeLog, TrackerStatistics, User};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{message} (HTTP {status})")]
    Api { status: StatusCode, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Thin HTTP client for the worklog API.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_users(
        &self,
        passport: Option<&str>,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<User>> {
        let mut query = vec![("skip", skip.to_string()), ("limit", limit.to_string())];
        if let Some(p) = passport {
            query.push(("passportNumber", p.to_string()));
        }

        let request = self.client.get(self.url("/users")).query(&query);
        self.send(request).await
    }

    pub async fn create_user(&self, passport_number: String) -> Result<User> {
        self.send_json(Method::POST, "/users", &UserPayload { passport_number })
            .await
    }

    pub async fn update_user(&self, id: i64, passport_number: String) -> Result<User> {
        self.send_json(
            Method::PUT,
            &format!("/users/{}", id),
            &UserPayload { passport_number },
        )
        .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<MessageResponse> {
        let request = self.client.delete(self.url(&format!("/users/{}", id)));
        self.send(request).await
    }

    pub async fn start_timer(&self, user_id: i64, task_id: i64) -> Result<TimeLog> {
        let path = format!("/users/{}/tasks/{}/start", user_id, task_id);
        self.send(self.client.post(self.url(&path))).await
    }

    pub async fn stop_timer(&self, user_id: i64, task_id: i64) -> Result<TimeLog> {
        let path = format!("/users/{}/tasks/{}/stop", user_id, task_id);
        self.send(self.client.post(self.url(&path))).await
    }

    pub async fn worklogs(
        &self,
        user_id: i64,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Vec<WorklogEntry>> {
        let mut query = Vec::new();
        if let Some(s) = start {
            query.push(("start", s));
        }
        if let Some(e) = end {
            query.push(("end", e));
        }

        let request = self
            .client
            .get(self.url(&format!("/users/{}/worklogs", user_id)))
            .query(&query);
        self.send(request).await
    }

    pub async fn statistics(&self) -> Result<TrackerStatistics> {
        self.send(self.client.get(self.url("/stats"))).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self.client.request(method, self.url(path)).json(body);
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
            };
            tracing::debug!("API returned {}: {}", status, message);
            return Err(ClientError::Api { status, message });
        }

        Ok(response.json().await?)
    }
}
