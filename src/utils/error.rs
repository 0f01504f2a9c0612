use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Backend returned HTTP {status}: {message}")]
    BackendStatusError { status: u16, message: String },

    #[error("Unexpected backend response: {message}")]
    BackendResponseError { message: String },
}

impl AppError {
    /// 啟動失敗時提示使用者如何修正
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::MissingConfigError { .. } => {
                "Set the missing environment variable (or add it to .env) and restart"
            }
            AppError::InvalidConfigValueError { .. } | AppError::ConfigError { .. } => {
                "Check the configuration file and MEDIC_* environment variables"
            }
            AppError::IoError(_) => "Check that the port is free and the config file is readable",
            AppError::ApiError(_) => "Check network connectivity to the completion backend",
            AppError::BackendStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that the API key is valid for the selected backend"
            }
            AppError::BackendStatusError { .. } | AppError::BackendResponseError { .. } => {
                "The completion backend rejected the request; try again later"
            }
            AppError::SerializationError(_) => "The backend returned malformed JSON",
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AppError::ConfigError { .. }
                | AppError::MissingConfigError { .. }
                | AppError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_message_names_field() {
        let err = AppError::MissingConfigError {
            field: "OPENAI_API_KEY".to_string(),
        };
        assert_eq!(err.to_string(), "Missing configuration: OPENAI_API_KEY");
        assert!(err.is_config_error());
        assert!(err.recovery_suggestion().contains("environment variable"));
    }

    #[test]
    fn test_backend_status_suggestion_for_auth_failures() {
        let err = AppError::BackendStatusError {
            status: 401,
            message: "invalid key".to_string(),
        };
        assert!(!err.is_config_error());
        assert!(err.recovery_suggestion().contains("API key"));
        assert_eq!(err.to_string(), "Backend returned HTTP 401: invalid key");
    }

    #[test]
    fn test_unreadable_config_file_is_not_a_config_value_error() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "medic-assist.toml"));
        assert!(!err.is_config_error());

        let err = AppError::ConfigError {
            message: "TOML parsing error".to_string(),
        };
        assert!(err.is_config_error());
    }
}
