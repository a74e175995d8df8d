use std::sync::LazyLock;

use regex::Regex;

use crate::domain::DownloadKind;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9\-_.\s]").expect("filename pattern is a valid regex")
});

/// Sanitize filename the way the backend names its files:
/// anything outside `[a-zA-Z0-9-_.\s]` becomes `_`, then spaces become `_`.
pub fn sanitize_filename(filename: &str) -> String {
    UNSAFE_FILENAME_CHARS
        .replace_all(filename, "_")
        .replace(' ', "_")
}

/// Name offered in the save dialog for a download link.
pub fn suggested_filename(link: &str, kind: DownloadKind) -> String {
    let path = link.split(['?', '#']).next().unwrap_or_default();
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    let name = sanitize_filename(last_segment.trim());
    let name = name.trim_matches(|c| c == '.' || c == '_');

    if name.is_empty() {
        format!("download.{}", kind.fallback_extension())
    } else {
        name.to_string()
    }
}
