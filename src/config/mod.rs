#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::{hf_inference, openai};
use crate::domain::model::{GenerationParams, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ENV_BACKEND: &str = "MEDIC_BACKEND";
pub const ENV_MODEL: &str = "MEDIC_MODEL";
pub const ENV_BASE_URL: &str = "MEDIC_BASE_URL";
pub const ENV_HOST: &str = "MEDIC_HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_MAX_TOKENS: &str = "MEDIC_MAX_TOKENS";
pub const ENV_TEMPERATURE: &str = "MEDIC_TEMPERATURE";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum BackendKind {
    #[default]
    #[serde(rename = "openai")]
    #[cfg_attr(feature = "cli", value(name = "openai"))]
    OpenAi,
    #[serde(rename = "hf")]
    #[cfg_attr(feature = "cli", value(name = "hf"))]
    HfInference,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::OpenAi => "openai",
            BackendKind::HfInference => "hf",
        }
    }

    pub fn api_key_var(&self) -> &'static str {
        match self {
            BackendKind::OpenAi => "OPENAI_API_KEY",
            BackendKind::HfInference => "HF_API_KEY",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            BackendKind::OpenAi => openai::DEFAULT_MODEL,
            BackendKind::HfInference => hf_inference::DEFAULT_MODEL,
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            BackendKind::OpenAi => openai::DEFAULT_BASE_URL,
            BackendKind::HfInference => hf_inference::DEFAULT_BASE_URL,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(BackendKind::OpenAi),
            "hf" | "huggingface" | "hf-inference" => Ok(BackendKind::HfInference),
            other => Err(AppError::InvalidConfigValueError {
                field: ENV_BACKEND.to_string(),
                value: other.to_string(),
                reason: "Supported backends: openai, hf".to_string(),
            }),
        }
    }
}

/// Process-lifetime settings, read once at startup.
#[derive(Clone, PartialEq)]
pub struct AppConfig {
    pub backend: BackendKind,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub host: String,
    pub port: u16,
    pub generation: GenerationParams,
}

// api_key 不可出現在日誌中
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("backend", &self.backend)
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("generation", &self.generation)
            .finish()
    }
}

fn parse_var<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| AppError::InvalidConfigValueError {
                field: key.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}

impl AppConfig {
    /// 從任意 key/value 來源建立配置 (環境變數、TOML、CLI 疊加)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match get(ENV_BACKEND) {
            Some(raw) => raw.parse()?,
            None => BackendKind::default(),
        };

        let key_var = backend.api_key_var();
        let api_key = get(key_var).ok_or_else(|| AppError::MissingConfigError {
            field: key_var.to_string(),
        })?;

        Ok(Self {
            backend,
            api_key,
            model: get(ENV_MODEL).unwrap_or_else(|| backend.default_model().to_string()),
            base_url: get(ENV_BASE_URL).unwrap_or_else(|| backend.default_base_url().to_string()),
            host: get(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(ENV_PORT, get(ENV_PORT), DEFAULT_PORT)?,
            generation: GenerationParams {
                max_tokens: parse_var(ENV_MAX_TOKENS, get(ENV_MAX_TOKENS), DEFAULT_MAX_TOKENS)?,
                temperature: parse_var(ENV_TEMPERATURE, get(ENV_TEMPERATURE), DEFAULT_TEMPERATURE)?,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_non_empty_string(self.backend.api_key_var(), &self.api_key)?;
        validate_non_empty_string(ENV_MODEL, &self.model)?;
        validate_url(ENV_BASE_URL, &self.base_url)?;
        validate_non_empty_string(ENV_HOST, &self.host)?;
        validate_positive_number(ENV_PORT, self.port as usize, 1)?;
        validate_positive_number(ENV_MAX_TOKENS, self.generation.max_tokens as usize, 1)?;
        validate_range(ENV_TEMPERATURE, self.generation.temperature, 0.0, 2.0)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
