//! Hosted open-weight inference backend (`/models/{model}`).
//!
//! Upstream failures are reported as page text, not as errors, and the
//! response envelope is normalized by [`extract_generated_text`].

use crate::domain::model::{GenerationParams, PromptRequest, API_ERROR_LABEL};
use crate::domain::ports::CompletionBackend;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

const TEXT_FIELD: &str = "generated_text";

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

pub struct HfInferenceBackend {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl HfInferenceBackend {
    pub fn new(client: Client, api_key: String, model: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }
}

/// `[{"generated_text": ..}, ..]` or `{"generated_text": ..}`; anything
/// else comes back as the JSON text of the whole response.
pub fn extract_generated_text(response: &Value) -> String {
    let candidate = match response {
        Value::Array(items) => items.first().and_then(|item| item.get(TEXT_FIELD)),
        Value::Object(map) => map.get(TEXT_FIELD),
        _ => None,
    };

    match candidate.and_then(Value::as_str) {
        Some(text) => text.to_string(),
        None => {
            tracing::warn!("Unrecognized inference response shape, returning raw response");
            response.to_string()
        }
    }
}

#[async_trait]
impl CompletionBackend for HfInferenceBackend {
    fn name(&self) -> &'static str {
        "hf-inference"
    }

    async fn complete(&self, request: &PromptRequest, params: &GenerationParams) -> Result<String> {
        let payload = InferenceRequest {
            inputs: &request.prompt,
            parameters: InferenceParameters {
                max_new_tokens: params.max_tokens,
                temperature: params.temperature,
                return_full_text: false,
            },
        };

        tracing::debug!("Making inference request to: {}", self.url());
        let response = self
            .client
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Inference response status: {}", status);
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Inference API returned {}", status.as_u16());
            return Ok(format!("{} {}: {}", API_ERROR_LABEL, status.as_u16(), body));
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(json) => Ok(extract_generated_text(&json)),
            Err(_) => Ok(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_extract_from_list() {
        let response = json!([{"generated_text": "Hypothèses générales"}]);
        assert_eq!(extract_generated_text(&response), "Hypothèses générales");
    }

    #[test]
    fn test_extract_from_list_uses_first_item() {
        let response = json!([{"generated_text": "first"}, {"generated_text": "second"}]);
        assert_eq!(extract_generated_text(&response), "first");
    }

    #[test]
    fn test_extract_from_object() {
        let response = json!({"generated_text": "Questions complémentaires"});
        assert_eq!(extract_generated_text(&response), "Questions complémentaires");
    }

    #[test]
    fn test_unknown_shape_is_stringified() {
        let response = json!({"outputs": "x"});
        assert_eq!(extract_generated_text(&response), r#"{"outputs":"x"}"#);

        let empty = json!([]);
        assert_eq!(extract_generated_text(&empty), "[]");

        let not_text = json!([{"generated_text": 42}]);
        assert_eq!(extract_generated_text(&not_text), r#"[{"generated_text":42}]"#);
    }

    fn backend_for(server: &MockServer) -> HfInferenceBackend {
        HfInferenceBackend::new(
            Client::new(),
            "hf_test".to_string(),
            "org/model".to_string(),
            server.base_url(),
        )
    }

    fn request() -> PromptRequest {
        PromptRequest {
            system: Some("ignored".to_string()),
            prompt: "Cas clinique :\ntoux".to_string(),
        }
    }

    #[tokio::test]
    async fn test_sends_inference_parameters() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/models/org/model")
                .header("authorization", "Bearer hf_test")
                .json_body(json!({
                    "inputs": "Cas clinique :\ntoux",
                    "parameters": {
                        "max_new_tokens": 600,
                        "temperature": 0.7,
                        "return_full_text": false
                    }
                }));
            then.status(200)
                .json_body(json!([{"generated_text": "Analyse HF"}]));
        });

        let text = backend_for(&server)
            .complete(&request(), &GenerationParams::default())
            .await
            .unwrap();

        mock.assert();
        assert_eq!(text, "Analyse HF");
    }

    #[tokio::test]
    async fn test_non_success_status_becomes_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/models/org/model");
            then.status(503).body(r#"{"error":"Model is currently loading"}"#);
        });

        let text = backend_for(&server)
            .complete(&request(), &GenerationParams::default())
            .await
            .unwrap();

        assert!(text.starts_with("Erreur API 503"));
        assert!(text.contains(r#"{"error":"Model is currently loading"}"#));
    }

    #[tokio::test]
    async fn test_non_json_body_is_returned_raw() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/models/org/model");
            then.status(200).body("plain text answer");
        });

        let text = backend_for(&server)
            .complete(&request(), &GenerationParams::default())
            .await
            .unwrap();

        assert_eq!(text, "plain text answer");
    }
}
