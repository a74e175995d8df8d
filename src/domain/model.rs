use std::fmt;

use serde::{Deserialize, Serialize};

/// Which asset the backend should produce for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadKind {
    Video,
    Audio,
}

impl DownloadKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DownloadKind::Video => "video",
            DownloadKind::Audio => "audio",
        }
    }

    /// Extension used when a link carries no usable file name.
    pub fn fallback_extension(self) -> &'static str {
        match self {
            DownloadKind::Video => "mp4",
            DownloadKind::Audio => "mp3",
        }
    }
}

impl fmt::Display for DownloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated answer of the backend to one download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Success { link: String },
    Failure { message: String },
}

/// Identifies one request so a late response can be told apart from the newest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
}

/// Content of the result region. Every update replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultRegion {
    #[default]
    Empty,
    Notice { tone: Tone, text: String },
    Link {
        href: String,
        kind: DownloadKind,
        label: String,
    },
}

impl ResultRegion {
    pub fn success(text: impl Into<String>) -> Self {
        ResultRegion::Notice {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        ResultRegion::Notice {
            tone: Tone::Danger,
            text: text.into(),
        }
    }

    pub fn link(href: impl Into<String>, kind: DownloadKind) -> Self {
        ResultRegion::Link {
            href: href.into(),
            kind,
            label: format!("Click here to download your {}", kind),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ResultRegion::Empty => "",
            ResultRegion::Notice { text, .. } => text,
            ResultRegion::Link { label, .. } => label,
        }
    }
}
