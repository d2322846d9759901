//! Delivery tests for the Telegram notifier, with wiremock standing in for
//! the Bot API. Run with:
//!
//! ```bash
//! cargo test -p domashka-notifier --test integration
//! ```

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use domashka_common::error::WatchError;
use domashka_notifier::TelegramNotifier;

// ============================================================
// Shared helpers
// ============================================================

const TOKEN: &str = "test-telegram-token";
const CHAT_ID: &str = "424242";

fn make_notifier(server: &MockServer) -> TelegramNotifier {
    TelegramNotifier::new(
        TOKEN.to_string(),
        CHAT_ID.to_string(),
        Duration::from_secs(2),
    )
    .with_api_base(server.uri())
}

// ============================================================
// Happy path
// ============================================================

#[tokio::test]
async fn test_send_posts_chat_id_and_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendMessage")))
        .and(body_json(json!({
            "chat_id": CHAT_ID,
            "text": "Изменился статус проверки работы \"hw1\". \
                     Работа взята на проверку ревьюером."
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": {} })),
        )
        .expect(1)
        .mount(&server)
        .await;

    make_notifier(&server)
        .send(
            "Изменился статус проверки работы \"hw1\". \
             Работа взята на проверку ревьюером.",
        )
        .await
        .expect("delivery should succeed");
}

// ============================================================
// Failure classification
// ============================================================

#[tokio::test]
async fn test_http_error_status_is_delivery_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendMessage")))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = make_notifier(&server).send("hello").await.unwrap_err();
    assert!(matches!(err, WatchError::Delivery(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_ok_false_envelope_is_delivery_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendMessage")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let err = make_notifier(&server).send("hello").await.unwrap_err();
    assert!(matches!(err, WatchError::Delivery(_)));
    assert!(err.to_string().contains("chat not found"));
}

#[tokio::test]
async fn test_transport_error_text_never_contains_the_token() {
    // Grab a free port, then release it so the send fails at the transport
    // level, where the error text would normally carry the full request URL.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind to a free port");
    let addr = listener.local_addr().expect("listener has an address");
    drop(listener);

    let notifier = TelegramNotifier::new(
        TOKEN.to_string(),
        CHAT_ID.to_string(),
        Duration::from_secs(2),
    )
    .with_api_base(format!("http://{addr}"));

    let err = notifier.send("hello").await.unwrap_err();
    assert!(matches!(err, WatchError::Delivery(_)));
    assert!(
        !err.to_string().contains(TOKEN),
        "bot token leaked into the error text: {err}"
    );
}
