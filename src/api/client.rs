use futures::Stream;
use futures::TryStreamExt;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::models::{ApiConfig, DownloadRequest, DownloadResponse};
use crate::domain::{DownloadKind, DownloadOutcome};

const DOWNLOAD_PATH: &str = "/download";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid link: {0}")]
    InvalidLink(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Joins `link` onto the backend base URL. Absolute links pass through unchanged.
    pub fn resolve_link(&self, link: &str) -> Result<Url> {
        let base = Url::parse(&self.config.base_url)
            .map_err(|e| ApiError::InvalidLink(format!("{}: {}", self.config.base_url, e)))?;
        base.join(link)
            .map_err(|e| ApiError::InvalidLink(format!("{}: {}", link, e)))
    }

    /// Asks the backend to produce `kind` for `url`.
    ///
    /// The URL is sent as-is; an empty string is the backend's problem.
    /// A non-success status with an `error` field is a regular
    /// [`DownloadOutcome::Failure`], not an `Err`.
    pub async fn request_download(&self, url: &str, kind: DownloadKind) -> Result<DownloadOutcome> {
        let endpoint = self.resolve_link(DOWNLOAD_PATH)?;
        let body = DownloadRequest {
            url: url.to_string(),
            kind,
        };

        debug!(%endpoint, %kind, "requesting download");

        // `.json` sets Content-Type: application/json
        let response = self.http.post(endpoint).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        let payload: DownloadResponse = serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("JSON decode error: {}", e)))?;

        debug!(%status, "download response received");

        payload
            .into_outcome(status.is_success())
            .map_err(ApiError::InvalidResponse)
    }

    /// Fetch a produced file as a chunk stream.
    /// Fails before yielding anything when the status is not a success.
    pub async fn download_file_stream(
        &self,
        link: &str,
    ) -> Result<impl Stream<Item = Result<bytes::Bytes>>> {
        let target = self.resolve_link(link)?;
        let response = self
            .http
            .get(target)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| ApiError::Status(format!("Download request failed: {}", e)))?;

        Ok(response.bytes_stream().map_err(ApiError::RequestError))
    }
}
