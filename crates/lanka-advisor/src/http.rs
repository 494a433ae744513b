//! # HTTP Suggester
//!
//! [`RestockSuggester`] backed by an OpenAI-compatible chat-completions
//! endpoint.
//!
//! ## Request / Response
//! ```text
//! POST {endpoint}
//! Authorization: Bearer {key}
//! { "model": "...", "temperature": 0.2,
//!   "messages": [{ "role": "user", "content": <prompt> }] }
//!
//! 200 OK
//! { "choices": [{ "message": { "content": "[{\"itemName\": ...}]" } }] }
//! ```
//!
//! Models often wrap their answer in a markdown code fence, or echo the
//! `{"restockSuggestions": ...}` envelope; both are unwrapped.

use async_trait::async_trait;
use lanka_core::{SuggestRestockInput, SuggestRestockOutput};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, AdvisorResult};
use crate::prompt::render_prompt;
use crate::suggester::RestockSuggester;

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

// =============================================================================
// HttpSuggester
// =============================================================================

/// Calls the configured model once per suggestion request.
#[derive(Debug, Clone)]
pub struct HttpSuggester {
    client: Client,
    config: AdvisorConfig,
    api_key: String,
}

impl HttpSuggester {
    /// Creates a suggester with an explicit API key.
    pub fn new(config: AdvisorConfig, api_key: impl Into<String>) -> AdvisorResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AdvisorError::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(HttpSuggester {
            client,
            config,
            api_key: api_key.into(),
        })
    }

    /// Creates a suggester reading the key from `config.api_key_env`.
    pub fn from_env(config: AdvisorConfig) -> AdvisorResult<Self> {
        let api_key = config.api_key()?;
        Self::new(config, api_key)
    }

    fn map_send_error(&self, err: reqwest::Error) -> AdvisorError {
        if err.is_timeout() {
            AdvisorError::Timeout(self.config.timeout_secs)
        } else {
            AdvisorError::from(err)
        }
    }
}

#[async_trait]
impl RestockSuggester for HttpSuggester {
    async fn suggest(&self, input: SuggestRestockInput) -> AdvisorResult<SuggestRestockOutput> {
        let request = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: render_prompt(&input),
            }],
        };

        debug!(endpoint = %self.config.endpoint, model = %self.config.model, "Requesting restock suggestions");

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Advisor endpoint returned an error");
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AdvisorError::InvalidResponse("no choices in response".to_string()))?;

        Ok(SuggestRestockOutput {
            restock_suggestions: extract_json_array(&content)?,
        })
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}

// =============================================================================
// Response Cleanup
// =============================================================================

/// Pulls the suggestion array out of a model's reply.
pub fn extract_json_array(content: &str) -> AdvisorResult<String> {
    let text = strip_code_fence(content.trim());

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(_)) => Ok(text.to_string()),
        Ok(Value::Object(map)) => match map.get("restockSuggestions") {
            Some(Value::Array(items)) => Ok(Value::Array(items.clone()).to_string()),
            Some(Value::String(inner)) => extract_json_array(inner),
            _ => Err(AdvisorError::NotAnArray),
        },
        Ok(_) => Err(AdvisorError::NotAnArray),
        Err(e) => Err(AdvisorError::InvalidResponse(format!("model reply is not JSON: {}", e))),
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the language tag line ("json") if present.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().trim_end_matches("```").trim()
}
