//! Config schema types for the bridge support layer.

use {
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level bridge configuration.
///
/// Every field has a default so a missing or partial config file still
/// produces a usable (webhook-disabled) configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Key sent as `x-api-key` on outbound webhook calls.
    #[serde(
        serialize_with = "serialize_option_secret",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_key: Option<Secret<String>>,
    pub webhook: WebhookConfig,
    /// Callback event names that must not be delivered.
    pub disabled_callbacks: Vec<String>,
}

/// Outbound webhook settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub enabled: bool,
    /// Base delivery URL; the bridge derives per-session webhook URLs
    /// from it.
    pub url: String,
    /// Request timeout for a single delivery attempt.
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: String::new(),
            timeout_secs: 15,
        }
    }
}

impl BridgeConfig {
    /// The `x-api-key` header value, empty when no key is configured.
    #[must_use]
    pub fn api_key_value(&self) -> String {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().clone())
            .unwrap_or_default()
    }

    /// Check internal consistency, accumulating every problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.webhook.enabled {
            if self.webhook.url.is_empty() {
                problems.push("webhook.enabled requires webhook.url".to_string());
            } else if !self.webhook.url.starts_with("http://")
                && !self.webhook.url.starts_with("https://")
            {
                problems.push(format!(
                    "webhook.url must be http(s), got {}",
                    self.webhook.url
                ));
            }
            if self.webhook.timeout_secs == 0 {
                problems.push("webhook.timeout_secs must be at least 1".to_string());
            }
        }

        for name in &self.disabled_callbacks {
            if name.trim().is_empty() {
                problems.push("disabled_callbacks contains an empty name".to_string());
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems.join("; ")))
        }
    }
}

// ── Serde helper for Secret<String> ─────────────────────────────────────────

fn serialize_option_secret<S: serde::Serializer>(
    secret: &Option<Secret<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match secret {
        Some(s) => serializer.serialize_some(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}
