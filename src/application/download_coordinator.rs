use std::path::PathBuf;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::{
    api::ApiClient,
    domain::{AppError, DownloadKind, DownloadOutcome},
};

#[derive(Clone)]
pub struct DownloadCoordinator {
    api_client: ApiClient,
}

impl DownloadCoordinator {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    /// One `POST /download` for the current URL.
    /// Every client-side failure is reported as [`AppError::Unavailable`].
    pub async fn request_download(
        &self,
        video_url: String,
        kind: DownloadKind,
    ) -> Result<DownloadOutcome, AppError> {
        match self.api_client.request_download(&video_url, kind).await {
            Ok(outcome) => {
                if let DownloadOutcome::Failure { message } = &outcome {
                    info!(%kind, %message, "backend refused download");
                }
                Ok(outcome)
            }
            Err(e) => {
                warn!(%kind, error = %e, "download request failed");
                Err(AppError::Unavailable)
            }
        }
    }

    pub async fn choose_save_path(&self, suggested_filename: String) -> Option<PathBuf> {
        rfd::AsyncFileDialog::new()
            .set_file_name(&suggested_filename)
            .save_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    /// Streams the file behind `link` into `path`.
    ///
    /// Nothing is created until the server answers with a success status,
    /// and a file left incomplete by a later failure is removed.
    pub async fn save_link(&self, link: String, path: PathBuf) -> Result<PathBuf, AppError> {
        let stream = self
            .api_client
            .download_file_stream(&link)
            .await
            .map_err(|e| AppError::Http(e.to_string()))?;

        let file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| AppError::Io(format!("Failed to create file: {}", e)))?;

        if let Err(e) = write_stream(file, stream).await {
            if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                warn!(path = %path.display(), error = %remove_err, "failed to remove partial file");
            }
            return Err(e);
        }

        info!(path = %path.display(), "saved download");
        Ok(path)
    }
}

async fn write_stream(
    mut file: tokio::fs::File,
    stream: impl Stream<Item = crate::api::client::Result<Bytes>>,
) -> Result<(), AppError> {
    let mut stream = Box::pin(stream);

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| AppError::Http(e.to_string()))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| AppError::Io(format!("Write error: {}", e)))?;
    }

    file.sync_all()
        .await
        .map_err(|e| AppError::Io(format!("Failed to sync file: {}", e)))
}
