use thiserror::Error;

/// Failures as the user sees them in the result region.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Please enter a TikTok video URL.")]
    EmptyUrl,

    #[error("Error: {0}")]
    Server(String),

    /// Transport, decoding and payload-shape failures all collapse here.
    #[error("An error occurred. Please try again later.")]
    Unavailable,

    #[error("Download failed: {0}")]
    Http(String),

    #[error("I/O error: {0}")]
    Io(String),
}
