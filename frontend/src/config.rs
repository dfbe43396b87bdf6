//! Application configuration.
//!
//! Centralized configuration for the résumé extractor frontend.
//! The API base URL is read from the build environment (`API_URL`, as
//! Trunk passes it to rustc) and falls back to a local backend.

/// Default extraction API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5001";

/// Upload endpoint, relative to the API base.
pub const UPLOAD_PATH: &str = "/upload";

/// History endpoint, relative to the page origin.
pub const HISTORY_PATH: &str = "/history";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Accept-filter hint for the file picker.
pub const ACCEPTED_MIME: &str = "application/pdf";

/// Message shown to the user when an upload fails.
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Check console for details.";

/// Endpoints of the extraction API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    api_base: String,
}

impl ApiConfig {
    /// Build a config around an explicit base URL.
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        let api_base = api_base.trim_end_matches('/').to_string();
        Self { api_base }
    }

    /// Config from the `API_URL` build variable, or the local default.
    pub fn from_env() -> Self {
        match option_env!("API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// `{base}/upload`
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.api_base, UPLOAD_PATH)
    }

    /// History is served from the page origin, not the API base.
    // TODO: move under api_base once the backend confirms it serves /history cross-origin.
    pub fn history_url(&self) -> String {
        HISTORY_PATH.to_string()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_joins_base() {
        let config = ApiConfig::new("http://api.example.com");
        assert_eq!(config.upload_url(), "http://api.example.com/upload");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ApiConfig::new("http://api.example.com/");
        assert_eq!(config.api_base(), "http://api.example.com");
        assert_eq!(config.upload_url(), "http://api.example.com/upload");
    }

    #[test]
    fn test_history_url_ignores_base() {
        let config = ApiConfig::new("http://api.example.com");
        assert_eq!(config.history_url(), "/history");
    }

    #[test]
    fn test_from_env_has_base() {
        let config = ApiConfig::from_env();
        assert!(!config.api_base().is_empty());
        assert!(config.upload_url().ends_with("/upload"));
    }
}
