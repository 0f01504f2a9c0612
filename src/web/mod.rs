pub mod templates;
pub mod urls;
pub mod views;

use crate::adapters::build_backend;
use crate::config::AppConfig;
use crate::core::assistant::MedicalAssistant;
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<MedicalAssistant>,
}

impl AppState {
    pub fn new(assistant: MedicalAssistant) -> Self {
        Self {
            assistant: Arc::new(assistant),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(MedicalAssistant::new(build_backend(config), config.generation))
    }
}

/// Runs until the listener fails.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, urls::router(state)).await?;
    Ok(())
}
