use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Base URL of the service exposing `POST /download`.
    pub backend_url: String,
    pub log_level: String,
    /// Drop responses that belong to a request older than the newest one.
    pub ignore_stale_responses: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("backend_url", "http://127.0.0.1:5000")?
            .set_default("log_level", "info")?
            .set_default("ignore_stale_responses", false)?
            // Config file (optional)
            .add_source(File::with_name("config").required(false))
            // Environment variables (e.g. CLIP_DOWNLOADER_BACKEND_URL=http://host:8080)
            .add_source(Environment::with_prefix("CLIP_DOWNLOADER"));

        builder.build()?.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:5000".to_string(),
            log_level: "info".to_string(),
            ignore_stale_responses: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.backend_url, "http://127.0.0.1:5000");
        assert_eq!(settings.log_level, "info");
        assert!(!settings.ignore_stale_responses);
    }
}
