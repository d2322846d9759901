//! Failure de-duplication — keeps the chat free of repeated error reports.
//!
//! The poll loop announces a failure to the chat at most once per distinct
//! consecutive message: a new failure text gets reported and remembered, an
//! identical repeat is suppressed, and any fully successful cycle clears the
//! memory so the next occurrence reports again.
//!
//! State is held in-memory. If the process restarts, the marker resets and
//! an ongoing failure is reported once more, which is the right side to err
//! on.

/// Marker for the most recently reported failure message.
#[derive(Debug)]
pub struct FailureMarker {
    last: Option<String>,
}

impl FailureMarker {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Decide whether `message` should be reported, recording it either way.
    ///
    /// Returns `true` when the message differs from the last recorded one.
    /// The marker updates before the caller attempts delivery, so a broken
    /// notifier cannot turn one persistent failure into a report attempt
    /// every cycle.
    pub fn check_and_set(&mut self, message: &str) -> bool {
        if self.last.as_deref() == Some(message) {
            return false;
        }
        self.last = Some(message.to_string());
        true
    }

    /// Forget the recorded failure. Called after every successful cycle.
    pub fn clear(&mut self) {
        self.last = None;
    }
}

impl Default for FailureMarker {
    fn default() -> Self {
        Self::new()
    }
}
