//! Discord webhook notifier against a mocked endpoint

use chrono::{TimeZone, Utc};
use signalscan::models::alert::AlertMessage;
use signalscan::services::{DiscordNotifier, Notifier};
use signalscan::ScanError;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn alert() -> AlertMessage {
    AlertMessage {
        title: "📈 AAPL signal".to_string(),
        description: "**Combined score:** 3.700".to_string(),
        color: 0x2ECC71,
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 21, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn posts_embed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(body_partial_json(serde_json::json!({
            "embeds": [{
                "title": "📈 AAPL signal",
                "description": "**Combined score:** 3.700",
                "color": 3066993,
                "timestamp": "2024-03-01T21:00:00.000Z"
            }]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let notifier =
        DiscordNotifier::new(format!("{}/webhook", server.uri()), Duration::from_secs(5)).unwrap();
    notifier.send(&alert()).await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid Form Body"))
        .mount(&server)
        .await;

    let notifier =
        DiscordNotifier::new(format!("{}/webhook", server.uri()), Duration::from_secs(5)).unwrap();
    let err = notifier.send(&alert()).await.unwrap_err();
    assert!(matches!(err, ScanError::Notification(ref msg) if msg.contains("400")));
}
