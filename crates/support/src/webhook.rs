//! Outbound webhook delivery.
//!
//! Every bridge event that survives the callback filter is forwarded to a
//! caller-supplied webhook URL as a JSON POST; sessions may target distinct
//! URLs through the same notifier. Delivery is fire-and-forget: the caller
//! never learns whether the POST succeeded, and failures are only logged.

use std::{sync::Arc, time::Duration};

use {
    serde::Serialize,
    serde_json::Value,
    tracing::{debug, error},
};

use wabridge_config::BridgeConfig;

/// Wire body of a webhook POST: `{dataType, data, sessionId}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub data_type: String,
    pub data: Value,
    pub session_id: String,
}

/// Sends webhook notifications for bridge events.
///
/// Cheap to clone; the underlying HTTP client and config are shared.
#[derive(Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    config: Arc<BridgeConfig>,
}

impl WebhookNotifier {
    pub fn new(config: Arc<BridgeConfig>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.webhook.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Fire a webhook notification at `webhook_url` without waiting for the
    /// outcome.
    ///
    /// No-op when the webhook is disabled in config. The delivery runs on a
    /// spawned task; success is logged at debug, failure at error, and
    /// nothing propagates back to the caller.
    pub fn notify(&self, webhook_url: &str, session_id: &str, data_type: &str, data: Option<Value>) {
        if !self.config.webhook.enabled {
            return;
        }

        let notifier = self.clone();
        let url = webhook_url.to_string();
        let session_id = session_id.to_string();
        let data_type = data_type.to_string();
        tokio::spawn(async move {
            // Logs show an empty data field when no payload was attached.
            let shown = data.as_ref().map(Value::to_string).unwrap_or_default();
            match notifier.send(&url, &session_id, &data_type, data).await {
                Ok(()) => {
                    debug!(session_id, data_type, data = %shown, "webhook message sent to {url}");
                },
                Err(e) => {
                    error!(session_id, data_type, error = %e, data = %shown, "failed to send webhook message to {url}");
                },
            }
        });
    }

    /// Perform a single delivery attempt to `webhook_url` and report the
    /// outcome.
    ///
    /// A missing payload is sent as JSON `null`. The response body is not
    /// consumed; any non-2xx status is an error.
    pub async fn send(
        &self,
        webhook_url: &str,
        session_id: &str,
        data_type: &str,
        data: Option<Value>,
    ) -> anyhow::Result<()> {
        let payload = WebhookPayload {
            data_type: data_type.to_string(),
            data: data.unwrap_or(Value::Null),
            session_id: session_id.to_string(),
        };

        let resp = self
            .client
            .post(webhook_url)
            .header("x-api-key", self.config.api_key_value())
            .json(&payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            anyhow::bail!("webhook endpoint returned {}", resp.status());
        }
        Ok(())
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {secrecy::Secret, serde_json::json, wabridge_config::WebhookConfig};

    use super::*;

    fn notifier(enabled: bool) -> WebhookNotifier {
        let config = BridgeConfig {
            api_key: Some(Secret::new("test-key".into())),
            webhook: WebhookConfig {
                enabled,
                timeout_secs: 5,
                ..Default::default()
            },
            ..Default::default()
        };
        WebhookNotifier::new(Arc::new(config)).unwrap()
    }

    #[test]
    fn payload_serializes_camel_case() {
        let payload = WebhookPayload {
            data_type: "message".into(),
            data: json!({"body": "hi"}),
            session_id: "s1".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({"dataType": "message", "data": {"body": "hi"}, "sessionId": "s1"})
        );
    }

    #[tokio::test]
    async fn send_posts_exact_body_and_api_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("x-api-key", "test-key")
            .match_body(mockito::Matcher::Json(json!({
                "dataType": "message",
                "data": {"body": "hello"},
                "sessionId": "session-1",
            })))
            .with_status(200)
            .create_async()
            .await;

        let notifier = notifier(true);
        notifier
            .send(
                &server.url(),
                "session-1",
                "message",
                Some(json!({"body": "hello"})),
            )
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn one_notifier_targets_distinct_urls_per_call() {
        let mut server = mockito::Server::new_async().await;
        let mock_a = server
            .mock("POST", "/hook-a")
            .expect(1)
            .with_status(200)
            .create_async()
            .await;
        let mock_b = server
            .mock("POST", "/hook-b")
            .expect(1)
            .with_status(200)
            .create_async()
            .await;

        let notifier = notifier(true);
        let base = server.url();
        notifier
            .send(&format!("{base}/hook-a"), "s1", "message", None)
            .await
            .unwrap();
        notifier
            .send(&format!("{base}/hook-b"), "s2", "message", None)
            .await
            .unwrap();
        mock_a.assert_async().await;
        mock_b.assert_async().await;
    }

    #[tokio::test]
    async fn send_without_data_posts_null() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(mockito::Matcher::Json(json!({
                "dataType": "qr",
                "data": null,
                "sessionId": "session-1",
            })))
            .with_status(200)
            .create_async()
            .await;

        let notifier = notifier(true);
        notifier
            .send(&server.url(), "session-1", "qr", None)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn send_non_2xx_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(500)
            .create_async()
            .await;

        let notifier = notifier(true);
        let err = notifier
            .send(&server.url(), "s", "message", None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn notify_disabled_makes_no_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/").expect(0).create_async().await;

        let notifier = notifier(false);
        notifier.notify(&server.url(), "s", "message", Some(json!({"body": "hi"})));
        tokio::time::sleep(Duration::from_millis(100)).await;
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn notify_enabled_posts_exactly_once() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("x-api-key", "test-key")
            .expect(1)
            .with_status(200)
            .create_async()
            .await;

        let notifier = notifier(true);
        notifier.notify(&server.url(), "s", "ready", None);
        for _ in 0..50 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            if mock.matched_async().await {
                break;
            }
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn notify_swallows_delivery_failure() {
        // Unroutable port: the spawned task logs the failure and nothing
        // reaches the caller.
        let notifier = notifier(true);
        notifier.notify("http://127.0.0.1:1/hook", "s", "message", None);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}
