/// Application-level constants
pub const APP_NAME: &str = "Medinote";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default endpoint for the NER collaborator service.
pub const DEFAULT_NER_URL: &str = "http://localhost:8000";

/// Default endpoint for the sentiment collaborator service.
pub const DEFAULT_SENTIMENT_URL: &str = "http://localhost:8001";

/// Request timeout for a single collaborator call, in seconds.
pub const COLLABORATOR_TIMEOUT_SECS: u64 = 60;

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info,medinote=debug"
}
