use std::time::Duration;

use domashka_common::error::WatchError;
use domashka_notifier::TelegramNotifier;
use domashka_practicum::client::PracticumClient;
use domashka_practicum::response;

use crate::dedup::FailureMarker;

/// Homework poller that periodically queries the Practicum API and forwards
/// status changes to a Telegram chat.
///
/// One cycle runs to completion before the next sleep starts, so cycles
/// never overlap and all state lives on the poller itself: the query-window
/// cursor and the last-reported-failure marker. A failed cycle leaves the
/// cursor untouched, which makes the next cycle re-fetch the same window
/// instead of dropping updates.
pub struct HomeworkPoller {
    client: PracticumClient,
    notifier: TelegramNotifier,
    poll_interval: Duration,
    /// Lower bound of the next query window (unix seconds).
    cursor: i64,
    marker: FailureMarker,
}

impl HomeworkPoller {
    pub fn new(
        client: PracticumClient,
        notifier: TelegramNotifier,
        poll_interval: Duration,
        start_from: i64,
    ) -> Self {
        Self {
            client,
            notifier,
            poll_interval,
            cursor: start_from,
            marker: FailureMarker::new(),
        }
    }

    /// Current lower bound of the query window.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Start the polling loop. Runs indefinitely until the task is cancelled.
    pub async fn run(&mut self) {
        tracing::info!(
            start_from = self.cursor,
            poll_interval_secs = self.poll_interval.as_secs(),
            "Homework poller started"
        );

        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Execute a single fetch-check-notify cycle.
    ///
    /// Never returns an error: a failed cycle is reported to the chat (with
    /// de-duplication) and the loop carries on.
    pub async fn run_cycle(&mut self) {
        match self.poll_once().await {
            Ok(notified) => {
                self.marker.clear();
                if notified > 0 {
                    tracing::info!(count = notified, "Delivered status notifications");
                } else {
                    tracing::debug!(cursor = self.cursor, "No new homework statuses");
                }
            }
            Err(error) => self.report_failure(&error).await,
        }
    }

    /// Fetch the current window, notify for every record, advance the cursor.
    async fn poll_once(&mut self) -> Result<usize, WatchError> {
        let payload = self.client.homework_statuses(self.cursor).await?;
        let homeworks = response::homeworks(&payload)?;

        let mut notified = 0usize;
        for homework in homeworks {
            let text = response::status_change_message(homework)?;
            self.notifier.send(&text).await?;
            notified += 1;
        }

        // The cursor only moves forward, and only on a fully successful
        // cycle. A response without a usable current_date keeps the old
        // window; re-reading the same updates beats silently skipping them.
        if let Some(stamp) = response::current_date(&payload) {
            self.cursor = stamp.max(self.cursor);
        }

        Ok(notified)
    }

    /// Report a cycle failure to the chat, unless the identical failure was
    /// already reported since the last success.
    async fn report_failure(&mut self, error: &WatchError) {
        let text = format!("Сбой в работе программы: {error}");
        tracing::error!(error = %error, "Poll cycle failed");

        if !self.marker.check_and_set(&text) {
            tracing::debug!("Failure already reported, suppressing repeat");
            return;
        }

        if let Err(delivery) = self.notifier.send(&text).await {
            tracing::error!(error = %delivery, "Could not deliver failure report");
        }
    }
}
