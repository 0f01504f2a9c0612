use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TOKENS: u32 = 600;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Prefix of the text an inference backend returns instead of an error.
pub const API_ERROR_LABEL: &str = "Erreur API";

/// Form body posted to `/analyze/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseSubmission {
    pub case_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// What gets sent upstream. Single-prompt backends only use `prompt`.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub system: Option<String>,
    pub prompt: String,
}

/// Exactly one of these is produced per submission.
///
/// `Failure` covers both backend errors and the `Erreur API ...` text that
/// single-prompt backends return for a non-success status.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionResult {
    Analysis(String),
    Failure(String),
}

impl CompletionResult {
    pub fn text(&self) -> &str {
        match self {
            CompletionResult::Analysis(text) | CompletionResult::Failure(text) => text,
        }
    }
}
