//! REST client for the Docker Engine HTTP API.
//!
//! Wraps the daemon endpoints the dashboard proxies (container listing,
//! one-shot stats, lifecycle actions, system counts) using [`reqwest`].

use crate::raw::{RawContainer, RawStats, RawSystemInfo, RawVolumeList};
use crate::stats;
use crate::types::{ContainerStats, ContainerSummary, DockerSystemInfo};

/// HTTP client for a single Docker daemon.
pub struct DockerApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the Docker Engine API layer.
#[derive(Debug, thiserror::Error)]
pub enum DockerApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The daemon returned a non-2xx status code.
    #[error("Docker daemon error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl DockerApi {
    /// Create a new client for the daemon at `base_url`
    /// (e.g. `http://localhost:2375`).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL of the daemon.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List containers via `GET /containers/json`.
    ///
    /// With `all` false only running containers are returned, matching the
    /// daemon's default.
    pub async fn list_containers(
        &self,
        all: bool,
    ) -> Result<Vec<ContainerSummary>, DockerApiError> {
        let response = self
            .client
            .get(format!("{}/containers/json?all={all}", self.base_url))
            .send()
            .await?;

        let raw: Vec<RawContainer> = Self::parse_response(response).await?;
        Ok(raw.into_iter().map(ContainerSummary::from).collect())
    }

    /// Read a one-shot resource snapshot via
    /// `GET /containers/{id}/stats?stream=false`.
    pub async fn container_stats(&self, id: &str) -> Result<ContainerStats, DockerApiError> {
        let response = self
            .client
            .get(format!(
                "{}/containers/{id}/stats?stream=false",
                self.base_url
            ))
            .send()
            .await?;

        let raw: RawStats = Self::parse_response(response).await?;
        Ok(stats::summarize(&raw))
    }

    /// Start a container via `POST /containers/{id}/start`.
    pub async fn start_container(&self, id: &str) -> Result<(), DockerApiError> {
        self.lifecycle_action(id, "start").await
    }

    /// Stop a container via `POST /containers/{id}/stop`.
    pub async fn stop_container(&self, id: &str) -> Result<(), DockerApiError> {
        self.lifecycle_action(id, "stop").await
    }

    /// Restart a container via `POST /containers/{id}/restart`.
    pub async fn restart_container(&self, id: &str) -> Result<(), DockerApiError> {
        self.lifecycle_action(id, "restart").await
    }

    /// Aggregate daemon-wide object counts from `/info`, `/volumes`, and
    /// `/networks`.
    pub async fn system_info(&self) -> Result<DockerSystemInfo, DockerApiError> {
        let info_resp = self
            .client
            .get(format!("{}/info", self.base_url))
            .send()
            .await?;
        let info: RawSystemInfo = Self::parse_response(info_resp).await?;

        let volumes_resp = self
            .client
            .get(format!("{}/volumes", self.base_url))
            .send()
            .await?;
        let volumes: RawVolumeList = Self::parse_response(volumes_resp).await?;

        let networks_resp = self
            .client
            .get(format!("{}/networks", self.base_url))
            .send()
            .await?;
        let networks: Vec<serde_json::Value> = Self::parse_response(networks_resp).await?;

        Ok(DockerSystemInfo {
            containers: info.containers,
            images: info.images,
            volumes: volumes.volumes.map(|v| v.len()).unwrap_or(0),
            networks: networks.len(),
        })
    }

    // ---- private helpers ----

    async fn lifecycle_action(&self, id: &str, action: &str) -> Result<(), DockerApiError> {
        let response = self
            .client
            .post(format!("{}/containers/{id}/{action}", self.base_url))
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`DockerApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, DockerApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DockerApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, DockerApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), DockerApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
