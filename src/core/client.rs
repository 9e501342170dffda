use crate::config::{ClientConfig, DEFAULT_API_URL};
use crate::domain::model::{MessageCount, ProjectAttributes, UserAttributes};
use crate::domain::ports::ScratchApi;
use crate::domain::project::Project;
use crate::domain::user::User;
use crate::utils::error::{Result, ScratchError};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Scratch API.
///
/// Holds no mutable state; clones share the underlying connection pool.
/// Every domain object it returns carries a clone of it for follow-up
/// requests.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Client for the public API with the default configuration.
    pub fn new() -> Self {
        let config = ClientConfig::default();
        // Same failure mode as `reqwest::Client::new()`: only a broken TLS backend.
        let http = build_http(&config).expect("failed to initialize HTTP transport");
        Self {
            http,
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: build_http(&config)?,
            base_url: config.api_url,
        })
    }

    /// Uses a caller-built transport. `timeout_seconds` and `user_agent` are
    /// ignored; configure them on `http` instead.
    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http,
            base_url: config.api_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `Ok(None)` when the server answers 404.
    pub async fn user(&self, username: &str) -> Result<Option<User>> {
        let attrs: Option<UserAttributes> = self.get_optional(&["users", username]).await?;
        attrs.map(|attrs| User::new(attrs, self.handle())).transpose()
    }

    pub async fn project(&self, id: u64) -> Result<Project> {
        let attrs: ProjectAttributes = self.get(&["projects", &id.to_string()]).await?;
        Project::new(attrs, self.handle())
    }

    pub async fn projects(&self, username: &str) -> Result<Vec<Project>> {
        let all = self.get(&["users", username, "projects"]).await?;
        self.build_projects(all)
    }

    pub async fn favorites(&self, username: &str) -> Result<Vec<Project>> {
        let all = self.get(&["users", username, "favorites"]).await?;
        self.build_projects(all)
    }

    pub async fn followers(&self, username: &str) -> Result<Vec<User>> {
        let all = self.get(&["users", username, "followers"]).await?;
        self.build_users(all)
    }

    pub async fn following(&self, username: &str) -> Result<Vec<User>> {
        let all = self.get(&["users", username, "following"]).await?;
        self.build_users(all)
    }

    pub async fn message_count(&self, username: &str) -> Result<u64> {
        let body: MessageCount = self.get(&["users", username, "messages", "count"]).await?;
        Ok(body.count)
    }

    fn handle(&self) -> Arc<dyn ScratchApi> {
        Arc::new(self.clone())
    }

    fn build_projects(&self, all: Vec<ProjectAttributes>) -> Result<Vec<Project>> {
        let api = self.handle();
        all.into_iter()
            .map(|attrs| Project::new(attrs, Arc::clone(&api)))
            .collect()
    }

    fn build_users(&self, all: Vec<UserAttributes>) -> Result<Vec<User>> {
        let api = self.handle();
        all.into_iter()
            .map(|attrs| User::new(attrs, Arc::clone(&api)))
            .collect()
    }

    /// Appends percent-encoded segments to the base URL, so a username can
    /// never escape its own segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        for segment in segments {
            check_segment(segment)?;
        }
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| ScratchError::InvalidConfigValue {
                field: "api_url".to_string(),
                value: self.base_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, url: &Url) -> Result<reqwest::Response> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.http.get(url.clone()).send().await?;
        tracing::debug!("API response status: {}", response.status());
        Ok(response)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        let response = self.send(&url).await?;
        decode(&url, response).await
    }

    async fn get_optional<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<T>> {
        let url = self.endpoint(segments)?;
        let response = self.send(&url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("{} not found", url);
            return Ok(None);
        }
        decode(&url, response).await.map(Some)
    }
}

fn build_http(config: &ClientConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(
        config
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT),
    );
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Empty and dot segments would be dropped or resolved by URL normalization,
/// turning e.g. `/users/../projects` into a different resource.
fn check_segment(segment: &str) -> Result<()> {
    if matches!(segment, "" | "." | "..") {
        return Err(ScratchError::InvalidPathSegment {
            segment: segment.to_string(),
            reason: "empty and dot segments are not allowed".to_string(),
        });
    }
    Ok(())
}

async fn decode<T: DeserializeOwned>(url: &Url, response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Request to {} failed with status {}", url, status);
        return Err(ScratchError::Request {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Unexpected response body from {}: {}", url, e);
        ScratchError::Deserialization(e)
    })
}

#[async_trait]
impl ScratchApi for Client {
    async fn user(&self, username: &str) -> Result<Option<User>> {
        Client::user(self, username).await
    }

    async fn project(&self, id: u64) -> Result<Project> {
        Client::project(self, id).await
    }

    async fn projects(&self, username: &str) -> Result<Vec<Project>> {
        Client::projects(self, username).await
    }

    async fn favorites(&self, username: &str) -> Result<Vec<Project>> {
        Client::favorites(self, username).await
    }

    async fn followers(&self, username: &str) -> Result<Vec<User>> {
        Client::followers(self, username).await
    }

    async fn following(&self, username: &str) -> Result<Vec<User>> {
        Client::following(self, username).await
    }

    async fn message_count(&self, username: &str) -> Result<u64> {
        Client::message_count(self, username).await
    }
}
