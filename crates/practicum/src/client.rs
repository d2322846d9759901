use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use domashka_common::error::WatchError;

/// HTTP client for the Practicum homework status endpoint.
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
    timeout: Duration,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            token,
            timeout,
        }
    }

    /// Fetch homework status updates registered at or after `from_date`
    /// (unix seconds).
    ///
    /// Returns the decoded body as raw JSON. Shape checks live in
    /// [`crate::response`]; this method only guarantees that the server
    /// answered 2xx with a valid JSON document.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value, WatchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(WatchError::Connectivity)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WatchError::UnexpectedStatus {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WatchError::Schema(format!("response body is not valid JSON: {e}")))
    }
}
