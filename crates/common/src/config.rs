use crate::error::WatchError;

/// Production endpoint for homework status queries.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Seconds between poll cycles unless `POLL_INTERVAL_SECS` overrides it.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Per-request timeout in seconds unless `REQUEST_TIMEOUT_SECS` overrides it.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Practicum API token (sent as `Authorization: OAuth <token>`)
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Telegram chat the notifications go to
    pub telegram_chat_id: String,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Seconds between poll cycles (default: 600)
    pub poll_interval_secs: u64,

    /// Timeout applied to every outbound HTTP request, in seconds (default: 10)
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing required variables are collected and reported in a single
    /// error so an unconfigured deployment fails once with the full list
    /// instead of once per variable. Empty values count as missing.
    pub fn from_env() -> Result<Self, WatchError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source. Split out
    /// of [`Config::from_env`] so tests can inject variables without
    /// touching the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WatchError> {
        let required = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let practicum_token = required("PRACTICUM_TOKEN");
        let telegram_token = required("TELEGRAM_TOKEN");
        let telegram_chat_id = required("TELEGRAM_CHAT_ID");

        let (practicum_token, telegram_token, telegram_chat_id) =
            match (practicum_token, telegram_token, telegram_chat_id) {
                (Some(practicum), Some(telegram), Some(chat)) => (practicum, telegram, chat),
                (practicum, telegram, chat) => {
                    let mut missing = Vec::new();
                    if practicum.is_none() {
                        missing.push("PRACTICUM_TOKEN");
                    }
                    if telegram.is_none() {
                        missing.push("TELEGRAM_TOKEN");
                    }
                    if chat.is_none() {
                        missing.push("TELEGRAM_CHAT_ID");
                    }
                    return Err(WatchError::Config(format!(
                        "missing required environment variables: {}",
                        missing.join(", ")
                    )));
                }
            };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: lookup("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            poll_interval_secs: lookup("POLL_INTERVAL_SECS")
                .unwrap_or_else(|| DEFAULT_POLL_INTERVAL_SECS.to_string())
                .parse()
                .map_err(|_| {
                    WatchError::Config("POLL_INTERVAL_SECS must be a valid u64".to_string())
                })?,
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| {
                    WatchError::Config("REQUEST_TIMEOUT_SECS must be a valid u64".to_string())
                })?,
        })
    }
}
