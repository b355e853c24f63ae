//! Logging setup and span constructors.

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used. Output goes to
/// stderr so that command output on stdout stays machine-readable.
pub fn init(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Standardized span constructors for bot observability.
pub mod spans {
    use tracing::{Span, info_span};

    /// Span for the handling of one Telegram update.
    pub fn update(update_id: i64, chat_id: i64) -> Span {
        info_span!("update", update_id = update_id, chat_id = chat_id)
    }
}
