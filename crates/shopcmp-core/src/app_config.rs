use std::path::PathBuf;

use crate::Language;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL, e.g. `http://localhost:8000`.
    pub api_url: String,
    pub log_level: String,
    /// Per-request timeout. `None` (the default) waits for the backend however
    /// long a comparison takes.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    /// Total attempts per request, including the first one.
    pub max_attempts: u32,
    /// Base delay for exponential backoff: `retry_backoff_base_ms * 2^attempt`.
    pub retry_backoff_base_ms: u64,
    pub queue_capacity: usize,
    pub page_size: usize,
    pub language: Language,
    /// File holding the persisted bearer token.
    pub token_path: PathBuf,
}
