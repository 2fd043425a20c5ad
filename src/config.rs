use std::time::Duration;

/// Base URL used when nothing else is configured (the backend's development port).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
/// Upper bound for a single request, including reading the body.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings shared by the HTTP client and the view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root URL of the backend, without the `/api` prefix.
    base_url: String,
    /// Time after which an outstanding request is reported as a timeout.
    request_timeout: Duration,
}

impl Config {
    pub fn new(base_url: &str, request_timeout: Duration) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string(), request_timeout }
    }

    pub fn with_timeout(self, request_timeout: Duration) -> Self {
        Self { request_timeout, ..self }
    }

    pub fn base_url(&self) -> &str { &self.base_url }
    pub fn request_timeout(&self) -> Duration { self.request_timeout }
}

impl Default for Config {
    fn default() -> Self { Self::new(DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT) }
}
