use crate::domain::model::{GenerationParams, PromptRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A hosted text-completion service.
///
/// `Err` means the call itself failed (transport, status, envelope) and is
/// turned into an error page by the caller. Backends that report upstream
/// failures as text instead return `Ok` with that text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Provider name for logging and `/healthz`.
    fn name(&self) -> &'static str;

    async fn complete(&self, request: &PromptRequest, params: &GenerationParams) -> Result<String>;
}
