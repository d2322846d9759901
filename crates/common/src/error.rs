use thiserror::Error;

/// Common error types used across the watcher.
///
/// Cycle failures are reported to the Telegram chat keyed on their rendered
/// text, so the `Display` output of every variant is part of the
/// de-duplication contract: the same failure must render identically from
/// one cycle to the next.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Practicum API request failed: {0}")]
    Connectivity(#[source] reqwest::Error),

    #[error("Practicum API returned {status} {reason}")]
    UnexpectedStatus { status: u16, reason: String },

    #[error("Malformed Practicum API response: {0}")]
    Schema(String),

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("Telegram delivery failed: {0}")]
    Delivery(String),
}
