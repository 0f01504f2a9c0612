use crate::core::prompt;
use crate::domain::model::{CompletionResult, GenerationParams, API_ERROR_LABEL};
use crate::domain::ports::CompletionBackend;
use std::sync::Arc;

pub const ERROR_LABEL: &str = "Erreur:";

/// Prompt → backend call → one `CompletionResult`.
pub struct MedicalAssistant {
    backend: Arc<dyn CompletionBackend>,
    params: GenerationParams,
}

impl MedicalAssistant {
    pub fn new(backend: Arc<dyn CompletionBackend>, params: GenerationParams) -> Self {
        Self { backend, params }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub async fn analyze(&self, case_text: &str) -> CompletionResult {
        let request = prompt::build_request(case_text);

        tracing::debug!(
            backend = self.backend.name(),
            case_chars = case_text.chars().count(),
            "Sending case to completion backend"
        );

        match self.backend.complete(&request, &self.params).await {
            Ok(text) if text.starts_with(API_ERROR_LABEL) => {
                tracing::warn!(backend = self.backend.name(), "❌ Backend reported: {}", text);
                CompletionResult::Failure(text)
            }
            Ok(text) => {
                tracing::info!(
                    backend = self.backend.name(),
                    response_chars = text.chars().count(),
                    "Analysis completed"
                );
                CompletionResult::Analysis(text)
            }
            Err(e) => {
                tracing::warn!(backend = self.backend.name(), "❌ Completion failed: {}", e);
                CompletionResult::Failure(format!("{} {}", ERROR_LABEL, e))
            }
        }
    }
}
