pub mod collaborators; // External NER + sentiment analysis services
pub mod config;
pub mod pipeline; // Extraction → summary → sentiment → SOAP

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the built-in default filter. Calling this more
/// than once is a no-op, so tests and embedding applications can both
/// call it unconditionally.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}
