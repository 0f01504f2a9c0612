// Adapters layer: concrete completion backends behind `CompletionBackend`.

pub mod hf_inference;
pub mod openai;

use crate::config::{AppConfig, BackendKind};
use crate::domain::ports::CompletionBackend;
use reqwest::Client;
use std::sync::Arc;

pub use hf_inference::HfInferenceBackend;
pub use openai::OpenAiBackend;

/// One shared `reqwest::Client` per process; no explicit timeout.
pub fn build_backend(config: &AppConfig) -> Arc<dyn CompletionBackend> {
    let client = Client::new();
    match config.backend {
        BackendKind::OpenAi => Arc::new(OpenAiBackend::new(
            client,
            config.api_key.clone(),
            config.model.clone(),
            config.base_url.clone(),
        )),
        BackendKind::HfInference => Arc::new(HfInferenceBackend::new(
            client,
            config.api_key.clone(),
            config.model.clone(),
            config.base_url.clone(),
        )),
    }
}
