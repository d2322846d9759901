use std::time::Duration;

use chrono::Utc;

use domashka_common::config::Config;
use domashka_notifier::TelegramNotifier;
use domashka_practicum::client::PracticumClient;
use domashka_watcher::poller::HomeworkPoller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "domashka_watcher=debug,domashka_notifier=debug".into()),
        )
        .init();

    tracing::info!("Domashka watcher starting...");

    // Load configuration; without the tokens there is nothing to do
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Cannot start without required configuration");
            return Err(e.into());
        }
    };

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let client = PracticumClient::new(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        timeout,
    );
    let notifier = TelegramNotifier::new(
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
        timeout,
    );

    // Only report homework updates from startup onward
    let mut poller = HomeworkPoller::new(
        client,
        notifier,
        Duration::from_secs(config.poll_interval_secs),
        Utc::now().timestamp(),
    );

    tracing::info!(endpoint = %config.endpoint, "Starting homework poller");

    // Run with graceful shutdown on Ctrl+C
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("Domashka watcher stopped.");
    Ok(())
}
