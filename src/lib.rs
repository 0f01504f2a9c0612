pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::{toml_config::TomlConfig, AppConfig, BackendKind};
pub use crate::core::assistant::MedicalAssistant;
pub use domain::model::{CaseSubmission, CompletionResult, GenerationParams, PromptRequest};
pub use domain::ports::CompletionBackend;
pub use utils::error::{AppError, Result};
pub use web::AppState;
