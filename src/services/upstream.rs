// src/services/upstream.rs
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ApiError;

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// One-shot client for the chat-completion endpoint. Holds the immutable
/// config and a pre-built reqwest client with the request timeout baked in.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl UpstreamClient {
    pub fn new(config: Arc<Config>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Sends the persona plus one user message and extracts the reply text.
    /// Exactly one call per invocation; every failure is terminal and
    /// classified, never retried.
    pub async fn complete(&self, user_message: &str) -> Result<String, ApiError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(ApiError::MissingCredential);
        };

        let payload = CompletionRequest {
            model: &self.config.model,
            messages: vec![
                Message {
                    role: "system",
                    content: &self.config.system_prompt,
                },
                Message {
                    role: "user",
                    content: user_message,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "completion call failed to complete");
                ApiError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "completion endpoint rejected the request");
            return Err(ApiError::UpstreamRejected(status));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ApiError::UpstreamMalformed(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ApiError::UpstreamMalformed("response contained no choices".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_request_matches_the_wire_shape() {
        let payload = CompletionRequest {
            model: "deepseek-chat",
            messages: vec![
                Message { role: "system", content: "persona" },
                Message { role: "user", content: "hello" },
            ],
            max_tokens: 500,
            temperature: 0.7,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model"], "deepseek-chat");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
        assert_eq!(json["max_tokens"], 500);
    }

    #[test]
    fn reply_text_is_read_from_the_first_choice() {
        let body = r#"{"choices":[{"message":{"content":"99.2%"}}]}"#;
        let parsed: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "99.2%");
    }

    #[tokio::test]
    async fn missing_credential_short_circuits_before_any_call() {
        let mut config = Config::from_env();
        config.api_key = None;
        // Unroutable address: reaching it would hang or error differently.
        config.api_url = "http://192.0.2.1/chat/completions".to_string();

        let client = UpstreamClient::new(Arc::new(config)).unwrap();
        let err = client.complete("hi").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingCredential));
    }
}
