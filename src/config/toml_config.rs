use crate::config::{
    BackendKind, ENV_BACKEND, ENV_BASE_URL, ENV_HOST, ENV_MAX_TOKENS, ENV_MODEL, ENV_PORT,
    ENV_TEMPERATURE,
};
use crate::utils::error::{AppError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file configuration. Every field may be omitted; missing values
/// fall through to environment variables.
///
/// ```toml
/// [server]
/// port = 8000
///
/// [backend]
/// kind = "openai"
/// api_key = "${OPENAI_API_KEY}"
///
/// [generation]
/// max_tokens = 600
/// temperature = 0.7
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub backend: BackendSection,
    #[serde(default)]
    pub generation: GenerationSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendSection {
    pub kind: Option<BackendKind>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationSection {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OPENAI_API_KEY})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Same keys as the environment, so the file can sit in front of it.
    pub fn lookup(&self, key: &str) -> Option<String> {
        let value = match key {
            ENV_BACKEND => self.backend.kind.map(|k| k.as_str().to_string()),
            ENV_MODEL => self.backend.model.clone(),
            ENV_BASE_URL => self.backend.base_url.clone(),
            ENV_HOST => self.server.host.clone(),
            ENV_PORT => self.server.port.map(|p| p.to_string()),
            ENV_MAX_TOKENS => self.generation.max_tokens.map(|v| v.to_string()),
            ENV_TEMPERATURE => self.generation.temperature.map(|v| v.to_string()),
            k if k == self.active_backend().api_key_var() => self.backend.api_key.clone(),
            _ => None,
        };

        // 未替換的 ${VAR} 視為未設定
        value.filter(|v| !(v.starts_with("${") && v.ends_with('}')))
    }

    fn active_backend(&self) -> BackendKind {
        self.backend.kind.unwrap_or_default()
    }
}
