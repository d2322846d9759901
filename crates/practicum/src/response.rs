//! Shape checks and message rendering for Practicum API payloads.
//!
//! The documented contract is narrow: a JSON object with a `homeworks`
//! array and a `current_date` timestamp, where each homework record carries
//! `status` and `homework_name`. Everything else about a record is opaque
//! and passes through untouched. Each check failure maps onto the error
//! kind the poll loop reports on: structural problems become
//! [`WatchError::Schema`], a status outside the verdict table becomes
//! [`WatchError::UnknownStatus`].

use serde_json::Value;

use domashka_common::error::WatchError;
use domashka_common::types::HomeworkStatus;

/// Extract the homework list from a decoded API response.
///
/// Records are returned as-is; per-record field checks happen in
/// [`status_change_message`].
pub fn homeworks(response: &Value) -> Result<&Vec<Value>, WatchError> {
    let object = response
        .as_object()
        .ok_or_else(|| WatchError::Schema("response is not a JSON object".to_string()))?;

    object
        .get("homeworks")
        .ok_or_else(|| WatchError::Schema("response has no 'homeworks' key".to_string()))?
        .as_array()
        .ok_or_else(|| WatchError::Schema("'homeworks' is not an array".to_string()))
}

/// Server-reported timestamp to use as the next query window's lower bound,
/// when the response carries one.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

/// Render the notification line for one homework record.
pub fn status_change_message(homework: &Value) -> Result<String, WatchError> {
    let status = homework
        .get("status")
        .ok_or_else(|| WatchError::Schema("homework record has no 'status' key".to_string()))?;

    let name = homework
        .get("homework_name")
        .ok_or_else(|| {
            WatchError::Schema("homework record has no 'homework_name' key".to_string())
        })?
        .as_str()
        .ok_or_else(|| WatchError::Schema("'homework_name' is not a string".to_string()))?;

    // A present-but-unrecognized status is not a schema problem. The server
    // may grow new statuses; we refuse to guess a verdict for them.
    let status = status
        .as_str()
        .and_then(HomeworkStatus::parse)
        .ok_or_else(|| WatchError::UnknownStatus(status_text(status)))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

fn status_text(value: &Value) -> String {
    match value.as_str() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    }
}
