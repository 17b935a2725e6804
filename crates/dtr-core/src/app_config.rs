/// Application configuration for the admin toolkit.
///
/// Carries no credentials: the backend access token is threaded into each
/// request-issuing call as an explicit parameter, never read from ambient
/// process-wide storage.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the attendance backend's REST surface, e.g.
    /// `https://attendance.example.com/api/v1`.
    pub api_base_url: String,
    /// Base URL of the address search service.
    pub geocode_base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}
