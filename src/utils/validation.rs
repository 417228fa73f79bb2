use crate::utils::error::{AlphaStreamError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AlphaStreamError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AlphaStreamError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AlphaStreamError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(AlphaStreamError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AlphaStreamError::InvalidRequestError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 資源 ID 會直接放進 URL 路徑，只接受 ASCII 英數字
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AlphaStreamError::InvalidRequestError {
            field: field_name.to_string(),
            reason: "Identifier cannot be empty".to_string(),
        });
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AlphaStreamError::InvalidRequestError {
            field: field_name.to_string(),
            reason: format!("Identifier '{}' must be ASCII alphanumeric", value),
        });
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    let mut parts = value.split('@');
    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        _ => false,
    };

    if !valid {
        return Err(AlphaStreamError::InvalidRequestError {
            field: field_name.to_string(),
            reason: format!("'{}' is not a valid e-mail address", value),
        });
    }
    Ok(())
}

pub fn validate_ordered<T: PartialOrd + std::fmt::Debug>(
    field_name: &str,
    minimum: Option<&T>,
    maximum: Option<&T>,
) -> Result<()> {
    if let (Some(min), Some(max)) = (minimum, maximum) {
        if min > max {
            return Err(AlphaStreamError::InvalidRequestError {
                field: field_name.to_string(),
                reason: format!("Minimum {:?} is greater than maximum {:?}", min, max),
            });
        }
    }
    Ok(())
}
