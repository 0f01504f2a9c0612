use crate::utils::error::{AppError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AppError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            // 不回顯內容，避免把金鑰寫進日誌
            value: String::new(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://api.openai.com/v1").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:9000").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_tokens", 600, 1).is_ok());
        assert!(validate_positive_number("max_tokens", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("temperature", 0.7_f32, 0.0, 2.0).is_ok());
        assert!(validate_range("temperature", 2.5_f32, 0.0, 2.0).is_err());
        assert!(validate_range("temperature", -0.1_f32, 0.0, 2.0).is_err());
    }

    #[test]
    fn test_validate_non_empty_string_hides_value() {
        match validate_non_empty_string("api_key", "   ") {
            Err(AppError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "api_key");
                assert!(value.is_empty());
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
        assert!(validate_non_empty_string("api_key", "sk-test").is_ok());
    }
}
