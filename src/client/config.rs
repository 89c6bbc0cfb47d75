use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Sinergia backend, without a trailing slash.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Rows per page for the message and user tables.
    pub page_size: usize,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:3000".to_string(),
            request_timeout_secs: 10,
            page_size: 10,
        }
    }
}
