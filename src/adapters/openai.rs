//! Chat Completions backend (`/chat/completions`).

use crate::domain::model::{GenerationParams, PromptRequest};
use crate::domain::ports::CompletionBackend;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiBackend {
    pub fn new(client: Client, api_key: String, model: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_payload<'a>(&'a self, request: &'a PromptRequest, params: &GenerationParams) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.prompt,
        });

        ChatRequest {
            model: &self.model,
            messages,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        }
    }
}

/// Prefer the provider's `error.message` over the raw body.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, request: &PromptRequest, params: &GenerationParams) -> Result<String> {
        let payload = self.build_payload(request, params);

        tracing::debug!("Making chat completion request to: {} (model {})", self.url(), self.model);
        let response = self
            .client
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Chat completion response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::BackendStatusError {
                status: status.as_u16(),
                message: upstream_error_message(&body),
            });
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::BackendResponseError {
                message: "no message content in choices".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn backend_for(server: &MockServer) -> OpenAiBackend {
        OpenAiBackend::new(
            Client::new(),
            "sk-test".to_string(),
            DEFAULT_MODEL.to_string(),
            format!("{}/", server.url("/v1")),
        )
    }

    fn request() -> PromptRequest {
        PromptRequest {
            system: Some("system text".to_string()),
            prompt: "user prompt".to_string(),
        }
    }

    #[tokio::test]
    async fn test_sends_system_and_user_messages() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer sk-test")
                .json_body(json!({
                    "model": "gpt-4o-mini",
                    "messages": [
                        {"role": "system", "content": "system text"},
                        {"role": "user", "content": "user prompt"}
                    ],
                    "max_tokens": 600,
                    "temperature": 0.7
                }));
            then.status(200).json_body(json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "Analyse"}}]
            }));
        });

        let text = backend_for(&server)
            .complete(&request(), &GenerationParams::default())
            .await
            .unwrap();

        mock.assert();
        assert_eq!(text, "Analyse");
    }

    #[tokio::test]
    async fn test_status_error_uses_upstream_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(401)
                .json_body(json!({"error": {"message": "Incorrect API key provided"}}));
        });

        let err = backend_for(&server)
            .complete(&request(), &GenerationParams::default())
            .await
            .unwrap_err();

        match err {
            AppError::BackendStatusError { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(json!({"choices": []}));
        });

        let err = backend_for(&server)
            .complete(&request(), &GenerationParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BackendResponseError { .. }));
    }

    #[test]
    fn test_upstream_error_message_falls_back_to_body() {
        assert_eq!(upstream_error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(
            upstream_error_message(r#"{"error":{"message":"quota"}}"#),
            "quota"
        );
    }
}
