use serde::{Deserialize, Serialize};

use crate::domain::{DownloadKind, DownloadOutcome};

/// Body of `POST /download`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: DownloadKind,
}

/// Response from the /download endpoint.
/// Success carries `download_link`, failure carries `error`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadResponse {
    pub download_link: Option<String>,
    pub error: Option<String>,
}

impl DownloadResponse {
    /// Checks the field the status promises is really there.
    pub fn into_outcome(self, status_ok: bool) -> Result<DownloadOutcome, String> {
        if status_ok {
            self.download_link
                .map(|link| DownloadOutcome::Success { link })
                .ok_or_else(|| "success response without download_link".to_string())
        } else {
            self.error
                .map(|message| DownloadOutcome::Failure { message })
                .ok_or_else(|| "error response without error message".to_string())
        }
    }
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let body = DownloadRequest {
            url: "https://www.tiktok.com/@user/video/1".to_string(),
            kind: DownloadKind::Audio,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"url": "https://www.tiktok.com/@user/video/1", "type": "audio"})
        );
    }

    #[test]
    fn test_outcome_follows_status() {
        let response: DownloadResponse =
            serde_json::from_value(json!({"download_link": "/static/a.mp4"})).unwrap();
        assert_eq!(
            response.into_outcome(true).unwrap(),
            DownloadOutcome::Success {
                link: "/static/a.mp4".to_string()
            }
        );

        let response: DownloadResponse =
            serde_json::from_value(json!({"error": "No URL provided"})).unwrap();
        assert_eq!(
            response.into_outcome(false).unwrap(),
            DownloadOutcome::Failure {
                message: "No URL provided".to_string()
            }
        );
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let response: DownloadResponse = serde_json::from_value(json!({"error": "boom"})).unwrap();
        assert!(response.into_outcome(true).is_err());

        let response: DownloadResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_outcome(false).is_err());
    }

    #[test]
    fn test_non_string_link_fails_to_decode() {
        let decoded = serde_json::from_value::<DownloadResponse>(json!({"download_link": 42}));
        assert!(decoded.is_err());
    }
}
