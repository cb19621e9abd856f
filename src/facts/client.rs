//! Fun-fact client for a Gemini-style `generateContent` endpoint.
//!
//! The request asks for a JSON object `{text, topic}`; the model's answer
//! arrives as a JSON string inside `candidates[0].content.parts[0].text`.
//! [`FunFactClient::fun_fact`] never fails: any problem falls back to
//! [`FunFact::fallback`].

use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::error::FactError;
use super::types::FunFact;
use crate::core::FactsConfig;

/// Client for the optional fun-fact service.
pub struct FunFactClient {
    config: FactsConfig,
    http: Client,
}

impl FunFactClient {
    /// Create a client from configuration.
    #[must_use]
    pub fn new(config: FactsConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Create a client that never calls out (always falls back).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(FactsConfig::default())
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Fetch a fun fact about `item_name`, or the fallback on any failure.
    pub async fn fun_fact(&self, item_name: &str) -> FunFact {
        match self.try_fun_fact(item_name).await {
            Ok(fact) => fact,
            Err(FactError::Disabled) => FunFact::fallback(item_name),
            Err(e) => {
                warn!(error = %e, item = item_name, "fun fact unavailable, using fallback");
                FunFact::fallback(item_name)
            }
        }
    }

    /// Fetch a fun fact, surfacing errors.
    pub async fn try_fun_fact(&self, item_name: &str) -> Result<FunFact, FactError> {
        if !self.config.enabled {
            return Err(FactError::Disabled);
        }
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| FactError::Config("no API key configured".into()))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        debug!(%url, item = item_name, "requesting fun fact");

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request_body(item_name))
            .timeout(Duration::from_millis(self.config.timeout_ms))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FactError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| FactError::ParseError(e.to_string()))?;
        parse_response(&json)
    }
}

/// Prompt shown to the model.
#[must_use]
pub fn prompt(item_name: &str) -> String {
    format!("Give me a very short, fun, 1-sentence fact for a 5-year-old child about {item_name}.")
}

fn request_body(item_name: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt(item_name) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "text": { "type": "STRING", "description": "The fun fact for the kid." },
                    "topic": { "type": "STRING", "description": "The item name." }
                },
                "required": ["text", "topic"]
            }
        }
    })
}

/// Extract a [`FunFact`] from a `generateContent` response body.
pub fn parse_response(json: &Value) -> Result<FunFact, FactError> {
    let text = json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .unwrap_or("")
        .trim();
    if text.is_empty() {
        return Err(FactError::EmptyResponse);
    }

    let fact: FunFact = serde_json::from_str(text).map_err(|e| FactError::ParseError(e.to_string()))?;
    if fact.text.trim().is_empty() {
        return Err(FactError::MissingField("text"));
    }
    if fact.topic.trim().is_empty() {
        return Err(FactError::MissingField("topic"));
    }
    Ok(fact)
}
